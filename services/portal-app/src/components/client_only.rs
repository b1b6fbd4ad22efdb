//! Mount gate component for browser-only subtrees

use client_gate::{MountGate, RenderContext};
use leptos::prelude::*;

/// Renders `children` only after the first commit in a browser.
///
/// The server and the hydration pass both produce `fallback` (nothing by
/// default), so the markup always matches. Effects never run during SSR,
/// which keeps the gate closed on the server.
#[component]
pub fn ClientOnly(
    /// Shown until the gate opens
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let gate = RwSignal::new(MountGate::new());

    Effect::new(move |_| {
        // maybe_update only notifies when the gate actually opened
        gate.maybe_update(|gate| gate.commit(RenderContext::current()));
    });

    move || {
        gate.track();
        let rendered = gate
            .try_update_untracked(|gate| gate.render(|| children().into_any()))
            .flatten();
        match rendered {
            Some(view) => view,
            None => fallback.run(),
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn server_render_omits_children() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <div>
                    <ClientOnly>
                        <p>"speech-widget"</p>
                    </ClientOnly>
                </div>
            }
            .to_html()
        });
        assert!(!html.contains("speech-widget"), "{html}");
    }

    #[test]
    fn server_render_shows_fallback() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <ClientOnly fallback=|| view! { <span>"placeholder"</span> }>
                    <p>"speech-widget"</p>
                </ClientOnly>
            }
            .to_html()
        });
        assert!(html.contains("placeholder"), "{html}");
        assert!(!html.contains("speech-widget"), "{html}");
    }
}
