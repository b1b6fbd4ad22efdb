//! Frequently asked questions and the search used by voice/text search

use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub tags: &'static [&'static str],
}

pub const ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does aligner treatment take?",
        answer: "Most treatments take between four and eight months. Your orthodontist \
                 gives you an exact estimate with your treatment plan.",
        tags: &["duration", "timeline"],
    },
    FaqEntry {
        question: "How many hours a day do I wear my aligners?",
        answer: "Wear them 20 to 22 hours a day and take them out only to eat, drink \
                 anything other than water, and brush.",
        tags: &["wear", "daily"],
    },
    FaqEntry {
        question: "Do aligners hurt?",
        answer: "You may feel pressure for a day or two after switching to a new set. \
                 That is a sign the aligners are moving your teeth.",
        tags: &["pain", "comfort"],
    },
    FaqEntry {
        question: "How do I clean my aligners?",
        answer: "Rinse them whenever you take them out and brush them gently with a soft \
                 toothbrush and clear, unscented soap. Avoid hot water.",
        tags: &["care", "cleaning"],
    },
    FaqEntry {
        question: "Can I pay monthly?",
        answer: "Yes. Monthly payment plans are available and many dental insurance plans \
                 cover part of the cost.",
        tags: &["pricing", "payment", "insurance"],
    },
    FaqEntry {
        question: "What happens after treatment?",
        answer: "You switch to retainers to keep your new smile in place. Your first set \
                 is included.",
        tags: &["retainer", "aftercare"],
    },
];

/// Case-insensitive match over question, answer and tags.
///
/// Every whitespace separated term has to match somewhere in the entry. A
/// blank query returns all entries.
pub fn search(query: &str) -> Vec<&'static FaqEntry> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    ENTRIES
        .iter()
        .filter(|entry| {
            let haystack = format!(
                "{} {} {}",
                entry.question,
                entry.answer,
                entry.tags.join(" ")
            )
            .to_lowercase();
            terms.iter().all(|term| haystack.contains(term.as_str()))
        })
        .collect()
}

/// schema.org `FAQPage` structured data for the given entries
pub fn structured_data(entries: &[&FaqEntry]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}
