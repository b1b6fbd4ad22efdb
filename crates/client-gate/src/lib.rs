//! Client Gate - deferred mounting of browser-only UI
//!
//! Server-side rendering runs without window, document or media APIs, and the
//! hydration pass in the browser has to reproduce the server output exactly.
//! Two independent mechanisms keep browser-only code out of both passes:
//!
//! - [`DeferredLoader`] holds back acquisition of an implementation until an
//!   interactive pass asks for it.
//! - [`MountGate`] withholds a subtree until the first commit in a browser,
//!   then asks for a single re-render.
//!
//! [`CapabilityGate`] extends the mount flag to an explicit
//! unprobed/unavailable/available state machine for individual APIs.

pub mod context;
pub mod deferred;
pub mod mount;
pub mod probe;

pub use context::{RenderContext, RenderPass};
pub use deferred::DeferredLoader;
pub use mount::MountGate;
pub use probe::{CapabilityGate, FnProbe, Probe, ProbeState};
