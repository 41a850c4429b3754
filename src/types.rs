// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search call.
//!
//! A [`Corpus`] is an immutable snapshot of everything searchable on the page:
//! FAQ entries (question + answer) and sections (title + content). The engine
//! consumes one snapshot per call and hands back [`ScoredResult`]s; nothing
//! here outlives the call that produced it.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Corpus entries**: both text fields are present, possibly empty. An
//!   empty field never matches a non-empty query, which is exactly what the
//!   "no results" path relies on. Half-formed entries are the collector's
//!   problem - see `corpus::parse_corpus`.
//!
//! - **ScoredResult ordering**: `score` descending, FAQ before section on
//!   ties, input order within a kind. The sort in `search` is stable and the
//!   candidate list is built FAQ-first, so insertion order *is* the tiebreak.
//!
//! - **SourceRef**: inert pass-through. The engine clones it into results and
//!   never looks inside.

use serde::{Deserialize, Serialize};

/// Opaque handle linking a result back to the content element it came from.
///
/// Whatever identifier the embedding UI uses to locate and highlight matched
/// content - an anchor like `"#faq-3"`, an element id, an index. The engine
/// treats it as inert data: cloned into results, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRef(pub String);

impl SourceRef {
    /// Borrow the underlying identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceRef {
    fn from(value: &str) -> Self {
        SourceRef(value.to_string())
    }
}

impl From<String> for SourceRef {
    fn from(value: String) -> Self {
        SourceRef(value)
    }
}

/// One question/answer pair from the page's FAQ.
///
/// Questions are weighted double in scoring - someone typing a query is more
/// likely asking a question than quoting an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub source: SourceRef,
}

/// One titled section of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    pub title: String,
    pub content: String,
    pub source: SourceRef,
}

/// Snapshot of all searchable content at the moment of a search call.
///
/// The engine never reads the page itself; a collector supplies this and the
/// engine treats it as read-only. Both sequences may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corpus {
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

impl Corpus {
    /// Total number of searchable items across both kinds.
    pub fn len(&self) -> usize {
        self.faq.len() + self.sections.len()
    }

    /// True when there is nothing to search.
    pub fn is_empty(&self) -> bool {
        self.faq.is_empty() && self.sections.is_empty()
    }
}

/// Which kind of content produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Faq,
    Section,
}

impl ResultKind {
    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Faq => "faq",
            ResultKind::Section => "section",
        }
    }
}

/// A ranked match, discarded after rendering or on the next search.
///
/// `primary` is the question or title, `secondary` the answer or content.
/// `index` is the item's position within its own kind's input sequence -
/// together with `kind` it identifies the scored item even if the UI lost
/// track of the `source` handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub kind: ResultKind,
    pub source: SourceRef,
    pub primary: String,
    pub secondary: String,
    pub score: f64,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_ref_round_trips_as_bare_string() {
        let json = serde_json::to_string(&SourceRef::from("#faq-3")).unwrap();
        assert_eq!(json, "\"#faq-3\"");
        let back: SourceRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "#faq-3");
    }

    #[test]
    fn result_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ResultKind::Faq).unwrap(), "\"faq\"");
        assert_eq!(ResultKind::Section.as_str(), "section");
    }

    #[test]
    fn corpus_len_counts_both_kinds() {
        let corpus = Corpus {
            faq: vec![FaqEntry {
                question: "q".to_string(),
                answer: "a".to_string(),
                source: SourceRef::from("#faq-0"),
            }],
            sections: vec![],
        };
        assert_eq!(corpus.len(), 1);
        assert!(!corpus.is_empty());
        assert!(Corpus::default().is_empty());
    }

    #[test]
    fn corpus_deserializes_with_missing_arrays() {
        let corpus: Corpus = serde_json::from_str("{}").unwrap();
        assert!(corpus.is_empty());
    }
}
