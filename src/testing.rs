//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Corpus, FaqEntry, SectionEntry, SourceRef};

/// Create a FAQ entry with an anchor derived from `id`.
///
/// This is the canonical implementation used across all tests.
pub fn make_faq(id: usize, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
        source: SourceRef(format!("#faq-{}", id)),
    }
}

/// Create a section entry with an anchor derived from `id`.
pub fn make_section(id: usize, title: &str, content: &str) -> SectionEntry {
    SectionEntry {
        title: title.to_string(),
        content: content.to_string(),
        source: SourceRef(format!("#section-{}", id)),
    }
}

/// A small guide-page corpus with the shape of the real thing: a handful of
/// FAQ entries and titled sections about scholarship applications.
pub fn sample_corpus() -> Corpus {
    Corpus {
        faq: vec![
            make_faq(
                0,
                "How do I apply for a scholarship?",
                "Start with the application form, then gather transcripts and two recommendation letters.",
            ),
            make_faq(
                1,
                "What documents are required?",
                "A passport, certified transcripts, language certificates, and a motivation letter.",
            ),
            make_faq(
                2,
                "When is the application deadline?",
                "Most programs close applications at the end of March; some extend into April.",
            ),
            make_faq(
                3,
                "Can I apply to several programs at once?",
                "Yes, parallel applications are allowed and usually recommended.",
            ),
        ],
        sections: vec![
            make_section(
                0,
                "Scholarship Guide",
                "Everything you need to plan a funded study program abroad, from first search to final interview.",
            ),
            make_section(
                1,
                "Application Timeline",
                "Month-by-month checklist covering document preparation, submission windows, and interview season.",
            ),
            make_section(
                2,
                "Visa and Travel",
                "After acceptance comes the student visa interview, insurance paperwork, and housing search.",
            ),
        ],
    }
}
