//! Aligner Portal - Leptos frontend
//!
//! Marketing pages and the patient portal sign-in, rendered on the server
//! and hydrated in the browser. Browser-only widgets are mounted through
//! [`components::ClientOnly`] and [`components::Deferred`].

pub mod app;
pub mod components;
pub mod faq;
pub mod pages;
pub mod seo;
pub mod settings;

pub use app::{shell, App};
pub use settings::{IdentitySettings, SiteSettings};

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let settings = SiteSettings::from_document();
    leptos::mount::hydrate_body(move || {
        provide_context(settings);
        view! { <App /> }
    });
}
