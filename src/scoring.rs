// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Per-field relevance is purely additive: an exact-phrase bonus, a bonus per
//! matching query token, and a positional bonus that decays with how deep in
//! the field the phrase first appears. A field that hits all three caps out at
//! `100 + 10 * token_count + 20`; a field with no match scores exactly 0 and
//! is excluded from the candidate set, not merely ranked low.
//!
//! # Constants (frozen for behavioral compatibility)
//!
//! | Constant              | Value | What it rewards                         |
//! |-----------------------|-------|-----------------------------------------|
//! | `EXACT_PHRASE_SCORE`  | 100.0 | The whole query appearing verbatim      |
//! | `TOKEN_MATCH_SCORE`   | 10.0  | Each query token (> 2 chars) present    |
//! | `MAX_POSITION_BONUS`  | 20.0  | Verbatim match at the start of a field  |
//! | `POSITION_DECAY_CHARS`| 10.0  | Chars of offset per point of decay      |
//! | `QUESTION_WEIGHT`     | 2.0   | FAQ question field vs its answer        |
//! | `TITLE_WEIGHT`        | 1.5   | Section title field vs its content      |
//!
//! The exact-phrase bonus dominates: a field containing the query verbatim
//! always beats one that only picked up token bonuses, since the positional
//! bonus never goes negative and tokens alone top out well below 100 for
//! realistic queries.

use crate::utils::char_index_of;

/// Bonus for the whole query appearing verbatim in a field.
pub const EXACT_PHRASE_SCORE: f64 = 100.0;

/// Bonus per query token found in a field.
///
/// Each token in the token list contributes at most once, but a token that
/// appears twice in the query is counted twice - the list is not deduplicated.
pub const TOKEN_MATCH_SCORE: f64 = 10.0;

/// Ceiling of the positional bonus, earned by a verbatim match at offset 0.
pub const MAX_POSITION_BONUS: f64 = 20.0;

/// The positional bonus loses one point per this many characters of offset,
/// decaying to nothing by character 200.
pub const POSITION_DECAY_CHARS: f64 = 10.0;

/// Tokens must be strictly longer than this to earn the token bonus.
///
/// One- and two-character tokens (articles, particles) are noise; they can
/// still score through the exact-phrase path if the query is that short.
pub const SHORT_TOKEN_MAX: usize = 2;

/// FAQ question relevance counts double against its answer.
pub const QUESTION_WEIGHT: f64 = 2.0;

/// Section title relevance weight against its body content.
pub const TITLE_WEIGHT: f64 = 1.5;

/// Additive relevance of one text field against a lowercased query.
///
/// `query_lower` must already be lowercased; the text is lowercased here, once.
/// Offsets and token lengths are counted in characters, not bytes, so Arabic
/// text decays at the same rate as ASCII. An empty query scores 0.
///
/// Never negative. A return of exactly 0 means "no match at all" and callers
/// use it to exclude the field's item from the candidate set.
pub fn relevance(text: &str, query_lower: &str) -> f64 {
    if query_lower.is_empty() {
        return 0.0;
    }

    let text_lower = text.to_lowercase();
    let mut score = 0.0;

    // Exact phrase match (highest bonus)
    if text_lower.contains(query_lower) {
        score += EXACT_PHRASE_SCORE;
    }

    // Word-by-word matching. Split on single spaces: runs of spaces yield
    // empty tokens, which the length filter discards anyway.
    for token in query_lower.split(' ') {
        if token.chars().count() > SHORT_TOKEN_MAX && text_lower.contains(token) {
            score += TOKEN_MATCH_SCORE;
        }
    }

    // Positional bonus for the whole query only, added once per field
    if let Some(first_index) = char_index_of(&text_lower, query_lower) {
        score += (MAX_POSITION_BONUS - first_index as f64 / POSITION_DECAY_CHARS).max(0.0);
    }

    score
}
