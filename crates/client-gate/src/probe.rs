//! Capability probe: resolve a browser capability once, and only in a browser

use std::fmt;

use crate::context::RenderContext;

/// Outcome of probing a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeState {
    /// No browser pass has run the probe yet
    Unprobed,
    /// The probe ran in a browser and the capability is missing
    Unavailable,
    /// The probe ran in a browser and the capability is usable
    Available,
}

impl fmt::Display for ProbeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeState::Unprobed => write!(f, "Unprobed"),
            ProbeState::Unavailable => write!(f, "Unavailable"),
            ProbeState::Available => write!(f, "Available"),
        }
    }
}

/// A check for a single browser capability
pub trait Probe {
    /// Human readable capability name, used in logs
    fn capability(&self) -> &str;

    /// Whether the capability is present. Only called in a browser context.
    fn is_available(&self) -> bool;
}

/// Probe backed by a closure
pub struct FnProbe<F> {
    name: &'static str,
    check: F,
}

impl<F: Fn() -> bool> FnProbe<F> {
    pub fn new(name: &'static str, check: F) -> Self {
        Self { name, check }
    }
}

impl<F: Fn() -> bool> Probe for FnProbe<F> {
    fn capability(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        (self.check)()
    }
}

/// Sticky three-state gate around a [`Probe`]
#[derive(Debug)]
pub struct CapabilityGate<P> {
    probe: P,
    state: ProbeState,
    probes: u32,
}

impl<P: Probe> CapabilityGate<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            state: ProbeState::Unprobed,
            probes: 0,
        }
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    pub fn is_available(&self) -> bool {
        self.state == ProbeState::Available
    }

    /// How many times the underlying probe ran; zero or one
    pub fn probe_count(&self) -> u32 {
        self.probes
    }

    /// Resolve the capability for a committed pass in `context`.
    ///
    /// Server passes leave the gate `Unprobed`. The first browser pass runs
    /// the probe; its answer is kept for the lifetime of the gate.
    pub fn resolve(&mut self, context: RenderContext) -> ProbeState {
        if self.state != ProbeState::Unprobed || !context.is_browser() {
            return self.state;
        }
        self.probes += 1;
        self.state = if self.probe.is_available() {
            ProbeState::Available
        } else {
            ProbeState::Unavailable
        };
        tracing::debug!(
            "capability '{}' resolved to {}",
            self.probe.capability(),
            self.state
        );
        self.state
    }
}
