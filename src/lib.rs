//! Relevance-ranked in-page search for FAQ and section content.
//!
//! This crate implements the search core of a guide page: given a typed query
//! and a snapshot of the page's searchable content, it produces a ranked,
//! capped list of matches. The engine is a pure function - no DOM, no I/O,
//! no state between calls - which is also what makes it testable without a
//! browser anywhere in sight.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   types.rs  │────▶│  scoring.rs  │────▶│  search.rs  │
//! │   (Corpus,  │     │ (relevance,  │     │  (search)   │
//! │ScoredResult)│     │  constants)  │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        ▲                                        │
//!        │                                        ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  corpus.rs  │                         │ cli/display │
//! │ (snapshot   │                         │ (rendering, │
//! │  loading)   │                         │  binary)    │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use dalil::{search, Corpus, FaqEntry, SourceRef};
//!
//! let corpus = Corpus {
//!     faq: vec![FaqEntry {
//!         question: "How do I apply for a scholarship?".to_string(),
//!         answer: "Start with the application form.".to_string(),
//!         source: SourceRef::from("#faq-0"),
//!     }],
//!     sections: vec![],
//! };
//!
//! let results = search(&corpus, "scholarship");
//! assert_eq!(results[0].source.as_str(), "#faq-0");
//! ```
//!
//! # Scoring
//!
//! Per-field relevance is additive: 100 for the query appearing verbatim,
//! 10 per query token longer than two characters, and a positional bonus of
//! up to 20 that decays by one point per ten characters of offset. Question
//! fields weigh double, section titles 1.5x. The constants are frozen - they
//! ship in `scoring` as named `pub const`s, and changing them changes ranking
//! behavior users have already learned.

// Module declarations
mod corpus;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use corpus::{load_corpus, parse_corpus};
pub use scoring::{
    relevance, EXACT_PHRASE_SCORE, MAX_POSITION_BONUS, POSITION_DECAY_CHARS, QUESTION_WEIGHT,
    SHORT_TOKEN_MAX, TITLE_WEIGHT, TOKEN_MATCH_SCORE,
};
pub use search::{search, MAX_RESULTS};
pub use types::{Corpus, FaqEntry, ResultKind, ScoredResult, SectionEntry, SourceRef};
#[cfg(feature = "unicode-normalization")]
pub use utils::strip_diacritics;
pub use utils::{preview_text, preview_text_with_limit, PREVIEW_MAX_CHARS};
