//! Execution context and render pass markers

use std::fmt;

/// Where a render pass is executing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderContext {
    /// Non-interactive server-side rendering, no browser globals
    Server,
    /// Interactive document with window, document and media APIs
    Browser,
}

impl RenderContext {
    pub fn is_browser(self) -> bool {
        matches!(self, RenderContext::Browser)
    }

    /// Context of the code that is currently compiled in.
    ///
    /// Only `wasm32` builds can ever observe a browser; everything else is
    /// a server. This is a compile-time answer; a runtime check for actual
    /// browser globals belongs to a [`crate::probe::Probe`].
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            RenderContext::Browser
        } else {
            RenderContext::Server
        }
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderContext::Server => write!(f, "server"),
            RenderContext::Browser => write!(f, "browser"),
        }
    }
}

/// Which pass of the render cycle is asking for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPass {
    /// Server render or the hydration pass that must reproduce it
    Initial,
    /// Any pass after the first commit in a browser
    Interactive,
}

impl fmt::Display for RenderPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderPass::Initial => write!(f, "initial"),
            RenderPass::Interactive => write!(f, "interactive"),
        }
    }
}
