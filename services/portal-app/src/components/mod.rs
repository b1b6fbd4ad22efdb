//! Reusable view components

pub mod client_only;
pub mod deferred;
pub mod floating_actions;
pub mod layout;
pub mod page_head;
pub mod sign_in;
pub mod voice_search;

pub use client_only::ClientOnly;
pub use deferred::{widget_factory, Deferred, WidgetFactory};
pub use floating_actions::FloatingActions;
pub use layout::Layout;
pub use page_head::PageHead;
pub use sign_in::SignInWidget;
pub use voice_search::VoiceSearch;
