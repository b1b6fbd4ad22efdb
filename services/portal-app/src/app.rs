//! Root component, router and SSR document shell

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Layout;
use crate::pages::{
    FaqPage, HomePage, HowItWorksPage, NotFoundPage, PortalSignInPage, PricingPage,
};
use crate::settings::{use_site_settings, SETTINGS_META};

/// Full HTML document rendered by the server around [`App`].
///
/// Embeds the site settings for [`crate::settings::SiteSettings::from_document`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_site_settings();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name=SETTINGS_META content=settings.to_meta_content() />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/how-it-works") view=HowItWorksPage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/portal/sign-in") view=PortalSignInPage />
                </Routes>
            </Layout>
        </Router>
    }
}
