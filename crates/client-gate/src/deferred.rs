//! Deferred loader: acquire an implementation only when an interactive pass needs it

use std::fmt;

use crate::context::RenderPass;

type Acquire<T> = Box<dyn FnOnce() -> T + Send + Sync>;

enum Slot<T> {
    Pending(Acquire<T>),
    Loaded(T),
    // Only observable if `acquire` panicked mid-load.
    Poisoned,
}

/// Lazily acquired value that is never touched during the initial pass
pub struct DeferredLoader<T> {
    slot: Slot<T>,
    loads: u32,
}

impl<T> DeferredLoader<T> {
    pub fn new(acquire: impl FnOnce() -> T + Send + Sync + 'static) -> Self {
        Self {
            slot: Slot::Pending(Box::new(acquire)),
            loads: 0,
        }
    }

    /// Produce the loaded value for this pass.
    ///
    /// `RenderPass::Initial` always yields `None` without acquiring, so the
    /// hydration pass matches the server output. The first interactive pass
    /// runs the acquisition; later passes reuse it.
    pub fn render(&mut self, pass: RenderPass) -> Option<&T> {
        if pass == RenderPass::Initial {
            return None;
        }
        if matches!(self.slot, Slot::Pending(_)) {
            if let Slot::Pending(acquire) = std::mem::replace(&mut self.slot, Slot::Poisoned) {
                self.loads += 1;
                tracing::trace!("acquiring deferred implementation");
                self.slot = Slot::Loaded(acquire());
            }
        }
        match &self.slot {
            Slot::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.slot, Slot::Loaded(_))
    }

    /// How many times the acquisition ran; zero or one
    pub fn load_count(&self) -> u32 {
        self.loads
    }
}

impl<T> fmt::Debug for DeferredLoader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.slot {
            Slot::Pending(_) => "pending",
            Slot::Loaded(_) => "loaded",
            Slot::Poisoned => "poisoned",
        };
        f.debug_struct("DeferredLoader")
            .field("state", &state)
            .field("loads", &self.loads)
            .finish()
    }
}
