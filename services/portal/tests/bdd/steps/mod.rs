//! BDD step definitions for the portal server

pub mod crawler_steps;
pub mod diagnostics_steps;
pub mod request_steps;
