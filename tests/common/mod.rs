//! Shared test utilities and fixtures.

#![allow(dead_code)]

// Re-export canonical test utilities from dalil::testing
pub use dalil::testing::{make_faq, make_section, sample_corpus};
