//! Routed pages

pub mod faq;
pub mod home;
pub mod how_it_works;
pub mod not_found;
pub mod portal;
pub mod pricing;

pub use faq::FaqPage;
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;
pub use portal::PortalSignInPage;
pub use pricing::PricingPage;
