//! Document head tags for a page's SEO record

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::seo::{self, PageMeta};
use crate::settings::use_site_settings;

#[component]
pub fn PageHead(page: &'static PageMeta) -> impl IntoView {
    let settings = use_site_settings();
    let title = seo::full_title(page, &settings.name);
    let canonical = settings.canonical_url(page.path);
    let keywords = page.keywords.join(", ");

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=page.description />
        <Meta name="keywords" content=keywords />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=page.description />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:type" content="website" />
        <Meta property="og:site_name" content=settings.name />
        <Link rel="canonical" href=canonical />
        {(!page.indexable).then(|| view! { <Meta name="robots" content="noindex, nofollow" /> })}
    }
}
