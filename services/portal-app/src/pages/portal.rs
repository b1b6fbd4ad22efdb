//! Patient portal sign-in

use leptos::prelude::*;

use crate::components::{widget_factory, ClientOnly, Deferred, PageHead, SignInWidget};
use crate::seo;

/// Hosts the identity provider widget.
///
/// The provider script touches `window` as soon as it loads, so both the
/// script and its mount element are created only in the browser.
#[component]
pub fn PortalSignInPage() -> impl IntoView {
    view! {
        <PageHead page=&seo::PORTAL_SIGN_IN />
        <h1>"Patient portal"</h1>
        <p>"Sign in to see your treatment plan, upcoming aligner sets and messages from your orthodontist."</p>
        <ClientOnly fallback=|| view! { <p class="identity-loading">"Loading sign-in..."</p> }>
            <Deferred
                load=|| widget_factory(|| view! { <SignInWidget /> })
                fallback=|| view! { <p class="identity-loading">"Loading sign-in..."</p> }
            />
        </ClientOnly>
    }
}
