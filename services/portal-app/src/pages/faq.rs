//! Searchable FAQ with structured data

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::{PageHead, VoiceSearch};
use crate::faq;
use crate::seo;

#[component]
pub fn FaqPage() -> impl IntoView {
    let query = use_query_map();
    let term = move || query.with(|params| params.get("q").unwrap_or_default());
    let results = move || faq::search(&term());
    let structured = faq::structured_data(&faq::search("")).to_string();

    view! {
        <PageHead page=&seo::FAQ />
        <script type="application/ld+json" inner_html=structured></script>
        <h1>"Frequently asked questions"</h1>
        <VoiceSearch action="/faq" />
        <Show when=move || !term().trim().is_empty()>
            <p class="faq-filter">"Results for \"" {term} "\""</p>
        </Show>
        {move || {
            let entries = results();
            if entries.is_empty() {
                view! { <p>"No questions match your search."</p> }.into_any()
            } else {
                view! {
                    <dl class="faq">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <dt>{entry.question}</dt>
                                    <dd>{entry.answer}</dd>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </dl>
                }
                    .into_any()
            }
        }}
    }
}
