//! Plans and payment options

use leptos::prelude::*;

use crate::components::PageHead;
use crate::seo;

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub monthly: &'static str,
    pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Mild",
        price: "$1,495",
        monthly: "$69/mo",
        features: &["Up to 10 aligner sets", "Remote check-ins", "First retainer included"],
    },
    Plan {
        name: "Complete",
        price: "$2,295",
        monthly: "$99/mo",
        features: &[
            "Unlimited aligner sets",
            "In-clinic progress visits",
            "Two retainer sets included",
        ],
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <PageHead page=&seo::PRICING />
        <h1>"Pricing"</h1>
        <div class="plans">
            {PLANS
                .iter()
                .map(|plan| {
                    view! {
                        <article class="plan">
                            <h2>{plan.name}</h2>
                            <p class="plan-price">{plan.price}" or "{plan.monthly}</p>
                            <ul>
                                {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <section id="consult">
            <h2>"Free consultation"</h2>
            <p>"Not sure which plan fits? Talk to an orthodontist at no cost."</p>
        </section>
    }
}
