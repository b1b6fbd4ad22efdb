//! Static SEO records for every routed page

use std::fmt;

/// Sitemap `<changefreq>` hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive metadata attached to a route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub change_frequency: ChangeFrequency,
    /// Sitemap priority in `0.0..=1.0`
    pub priority: f32,
    /// Listed in the sitemap and open to crawlers
    pub indexable: bool,
}

pub const HOME: PageMeta = PageMeta {
    path: "/",
    title: "Clear Aligners for a Confident Smile",
    description: "Straighten your teeth with custom clear aligners, planned by licensed \
                  orthodontists and delivered to your door.",
    keywords: &[
        "clear aligners",
        "invisible braces",
        "teeth straightening",
        "orthodontics",
    ],
    change_frequency: ChangeFrequency::Weekly,
    priority: 1.0,
    indexable: true,
};

pub const HOW_IT_WORKS: PageMeta = PageMeta {
    path: "/how-it-works",
    title: "How Clear Aligner Treatment Works",
    description: "From a 3D scan to your final retainer: the four steps of aligner \
                  treatment and what to expect at each one.",
    keywords: &["aligner treatment", "3D scan", "treatment plan", "retainer"],
    change_frequency: ChangeFrequency::Monthly,
    priority: 0.8,
    indexable: true,
};

pub const PRICING: PageMeta = PageMeta {
    path: "/pricing",
    title: "Aligner Pricing and Payment Plans",
    description: "Transparent pricing for clear aligner treatment, with monthly payment \
                  plans and insurance support.",
    keywords: &["aligner cost", "payment plan", "orthodontic insurance"],
    change_frequency: ChangeFrequency::Monthly,
    priority: 0.8,
    indexable: true,
};

pub const FAQ: PageMeta = PageMeta {
    path: "/faq",
    title: "Clear Aligner FAQ",
    description: "Answers to common questions about wearing, cleaning and paying for \
                  clear aligners.",
    keywords: &["aligner questions", "aligner care", "aligner faq"],
    change_frequency: ChangeFrequency::Monthly,
    priority: 0.6,
    indexable: true,
};

pub const PORTAL_SIGN_IN: PageMeta = PageMeta {
    path: "/portal/sign-in",
    title: "Patient Portal Sign In",
    description: "Sign in to track your aligner treatment progress.",
    keywords: &[],
    change_frequency: ChangeFrequency::Yearly,
    priority: 0.1,
    indexable: false,
};

pub const NOT_FOUND: PageMeta = PageMeta {
    path: "/404",
    title: "Page Not Found",
    description: "The page you were looking for does not exist.",
    keywords: &[],
    change_frequency: ChangeFrequency::Yearly,
    priority: 0.0,
    indexable: false,
};

/// Every routed page, in navigation order
pub const PAGES: &[PageMeta] = &[HOME, HOW_IT_WORKS, PRICING, FAQ, PORTAL_SIGN_IN];

/// Pages that belong in the sitemap
pub fn indexable_pages() -> impl Iterator<Item = &'static PageMeta> {
    PAGES.iter().filter(|page| page.indexable)
}

/// Document title with the site name appended
pub fn full_title(page: &PageMeta, site_name: &str) -> String {
    format!("{} | {}", page.title, site_name)
}
