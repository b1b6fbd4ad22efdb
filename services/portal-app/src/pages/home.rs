//! Landing page

use leptos::prelude::*;

use crate::components::{
    widget_factory, ClientOnly, Deferred, FloatingActions, PageHead, VoiceSearch,
};
use crate::seo;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageHead page=&seo::HOME />
        <section class="hero">
            <h1>"Straighter teeth, without the brackets"</h1>
            <p>
                "Custom clear aligners designed from a 3D scan of your smile and "
                "checked by a licensed orthodontist at every step."
            </p>
            <a class="button" href="/pricing#consult">"Get started"</a>
            <ClientOnly fallback=|| view! { <div class="voice-search-placeholder"></div> }>
                <Deferred load=|| widget_factory(|| view! { <VoiceSearch action="/faq" /> }) />
            </ClientOnly>
        </section>
        <section class="benefits">
            <h2>"Why patients choose aligners"</h2>
            <ul>
                <li>"Nearly invisible and removable for meals"</li>
                <li>"Fewer office visits than traditional braces"</li>
                <li>"Progress tracked in your patient portal"</li>
            </ul>
        </section>
        <ClientOnly>
            <FloatingActions />
        </ClientOnly>
    }
}
