//! Mount gate: withholds browser-only children until the first browser commit
//!
//! A gate starts closed. Every render pass goes through [`MountGate::render`],
//! which yields nothing while the gate is closed. The host calls
//! [`MountGate::commit`] after each pass has been committed; the first commit
//! in a browser opens the gate and asks the host for exactly one more pass.
//! Server passes never open it.

use crate::context::RenderContext;

/// Per-instance mount flag plus the bookkeeping needed to observe it
#[derive(Debug, Default)]
pub struct MountGate {
    mounted: bool,
    renders: u32,
    transitions: u32,
}

impl MountGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the gated children are being produced
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of render passes this instance has seen
    pub fn render_count(&self) -> u32 {
        self.renders
    }

    /// Number of closed -> open transitions; never more than one
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Run one render pass. `children` is only invoked when the gate is open.
    pub fn render<T>(&mut self, children: impl FnOnce() -> T) -> Option<T> {
        self.renders = self.renders.saturating_add(1);
        if self.mounted {
            Some(children())
        } else {
            None
        }
    }

    /// Post-commit hook.
    ///
    /// Returns `true` when the host must schedule another render pass, which
    /// only happens on the first commit in a browser context.
    pub fn commit(&mut self, context: RenderContext) -> bool {
        if self.mounted || !context.is_browser() {
            return false;
        }
        self.mounted = true;
        self.transitions += 1;
        tracing::trace!("mount gate opened after {} render(s)", self.renders);
        true
    }
}
