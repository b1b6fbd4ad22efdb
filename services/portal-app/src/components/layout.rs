//! Page shell: header navigation, content area and footer

use leptos::prelude::*;

use crate::seo;
use crate::settings::use_site_settings;

/// Header, main content and footer around every page
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header />
            <main class="layout-content">{children()}</main>
            <Footer />
        </div>
    }
}

/// Top navigation built from the SEO page list
#[component]
pub fn Header() -> impl IntoView {
    let settings = use_site_settings();
    let sign_in_path = settings.identity.sign_in_path.clone();
    let links = [seo::HOW_IT_WORKS, seo::PRICING, seo::FAQ]
        .into_iter()
        .map(|page| {
            let label = nav_label(page.path);
            view! { <a href=page.path class="nav-link">{label}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="header">
            <a href="/" class="header-logo">{settings.name}</a>
            <nav class="header-nav">{links}</nav>
            <a href=sign_in_path class="header-portal">"Patient portal"</a>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let settings = use_site_settings();
    let phone_href = format!("tel:{}", settings.phone);

    view! {
        <footer class="footer">
            <p>{settings.name}" - treatment planned and supervised by licensed orthodontists."</p>
            <p>
                <a href=phone_href>{settings.phone}</a>
            </p>
        </footer>
    }
}

fn nav_label(path: &str) -> &'static str {
    match path {
        "/how-it-works" => "How it works",
        "/pricing" => "Pricing",
        "/faq" => "FAQ",
        _ => "Home",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_cover_linked_pages() {
        assert_eq!(nav_label(seo::HOW_IT_WORKS.path), "How it works");
        assert_eq!(nav_label(seo::PRICING.path), "Pricing");
        assert_eq!(nav_label(seo::FAQ.path), "FAQ");
        assert_eq!(nav_label("/"), "Home");
    }
}
