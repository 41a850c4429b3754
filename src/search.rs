//! Ranked search over a corpus snapshot.
//!
//! One pass over the FAQ entries, one pass over the sections, a stable sort,
//! a cap. The engine is a pure function of its inputs: no I/O, no mutation of
//! the corpus, no state between calls. Debouncing rapid keystrokes is the
//! caller's concern - a call here runs to completion synchronously.

use std::cmp::Ordering;

use crate::scoring::{relevance, QUESTION_WEIGHT, TITLE_WEIGHT};
use crate::types::{Corpus, ResultKind, ScoredResult};

/// Maximum number of results returned by [`search`].
pub const MAX_RESULTS: usize = 10;

/// Search the corpus for the query, ranked best-first.
///
/// An empty or whitespace-only query returns the empty sequence - that is the
/// "clear results" path, not an error. Otherwise the query is lowercased once
/// and scored against every item; only items with a combined score above zero
/// become candidates, so "no results" means genuinely no match anywhere.
///
/// Ordering is a total order by score descending. The candidate list is built
/// FAQ-first in input order and the sort is stable, so ties fall back to
/// exactly that order: FAQ before section, then lower index first.
pub fn search(corpus: &Corpus, query: &str) -> Vec<ScoredResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    // Scored as typed (minus case): the guard above uses trim, the scoring
    // does not, matching the page's original behavior.
    let query_lower = query.to_lowercase();

    let mut results: Vec<ScoredResult> = Vec::new();

    for (index, entry) in corpus.faq.iter().enumerate() {
        let question_score = relevance(&entry.question, &query_lower);
        let answer_score = relevance(&entry.answer, &query_lower);
        let score = question_score * QUESTION_WEIGHT + answer_score;

        if score > 0.0 {
            results.push(ScoredResult {
                kind: ResultKind::Faq,
                source: entry.source.clone(),
                primary: entry.question.clone(),
                secondary: entry.answer.clone(),
                score,
                index,
            });
        }
    }

    for (index, entry) in corpus.sections.iter().enumerate() {
        let title_score = relevance(&entry.title, &query_lower);
        let content_score = relevance(&entry.content, &query_lower);
        let score = title_score * TITLE_WEIGHT + content_score;

        if score > 0.0 {
            results.push(ScoredResult {
                kind: ResultKind::Section,
                source: entry.source.clone(),
                primary: entry.title.clone(),
                secondary: entry.content.clone(),
                score,
                index,
            });
        }
    }

    // Stable sort: equal scores keep FAQ-before-section insertion order.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.truncate(MAX_RESULTS);
    results
}
