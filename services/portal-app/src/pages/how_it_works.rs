//! Treatment walkthrough

use leptos::prelude::*;

use crate::components::PageHead;
use crate::seo;

/// Steps of a typical treatment, in order
pub const STEPS: &[(&str, &str)] = &[
    (
        "Scan",
        "Visit a partner clinic or use an impression kit so we can build a 3D model of your teeth.",
    ),
    (
        "Plan",
        "An orthodontist designs your treatment and shows you a preview of the result.",
    ),
    (
        "Align",
        "Your aligners arrive in sets. Switch to the next set every one to two weeks.",
    ),
    (
        "Retain",
        "Retainers keep your teeth in their new position once treatment is complete.",
    ),
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <PageHead page=&seo::HOW_IT_WORKS />
        <h1>"How it works"</h1>
        <ol class="steps">
            {STEPS
                .iter()
                .map(|(title, body)| {
                    view! {
                        <li>
                            <h2>{*title}</h2>
                            <p>{*body}</p>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
