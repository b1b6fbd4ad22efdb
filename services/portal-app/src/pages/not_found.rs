use leptos::prelude::*;

use crate::components::PageHead;
use crate::seo;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageHead page=&seo::NOT_FOUND />
        <h1>"Page not found"</h1>
        <p>
            "The page you are looking for does not exist. "
            <a href="/">"Back to the home page"</a>
        </p>
    }
}
