//! Floating call-to-action buttons pinned to the viewport corner

use leptos::prelude::*;

use crate::settings::use_site_settings;

/// Scroll offset in pixels after which "back to top" is offered
pub const BACK_TO_TOP_THRESHOLD: f64 = 480.0;

/// Book, call and back-to-top buttons.
///
/// Reads the window scroll position, so it must be mounted behind
/// [`crate::components::ClientOnly`].
#[component]
pub fn FloatingActions() -> impl IntoView {
    let settings = use_site_settings();
    let phone_href = format!("tel:{}", settings.phone);
    let show_top = RwSignal::new(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        show_top.set(offset > BACK_TO_TOP_THRESHOLD);
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="floating-actions">
            <a class="fab fab-book" href="/pricing#consult">"Book a free consult"</a>
            <a class="fab fab-call" href=phone_href>"Call us"</a>
            <Show when=move || show_top.get()>
                <button
                    type="button"
                    class="fab fab-top"
                    aria-label="Back to top"
                    on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                >
                    "Top"
                </button>
            </Show>
        </div>
    }
}
