// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results and corpus statistics.
//!
//! One row per result: kind badge, primary text, a 100-character preview of
//! the secondary text, and the score. A distinct "no results" panel covers
//! the empty case for a non-empty query, mirroring what the page UI shows.
//!
//! Color goes through ANSI escapes, disabled for pipelines (non-TTY stdout)
//! and for `NO_COLOR` purists.

use std::sync::OnceLock;

use dalil::{preview_text, Corpus, ResultKind, ScoredResult};

/// Cached color decision for this process.
static USE_COLOR: OnceLock<bool> = OnceLock::new();

fn use_color() -> bool {
    *USE_COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

fn paint(text: &str, style: &str) -> String {
    if use_color() {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

fn kind_badge(kind: ResultKind) -> String {
    match kind {
        ResultKind::Faq => paint("[faq]    ", GREEN),
        ResultKind::Section => paint("[section]", CYAN),
    }
}

/// Print the ranked result list for a query.
pub fn print_results(query: &str, results: &[ScoredResult]) {
    println!(
        "{} {}",
        paint(&format!("{} result(s) for", results.len()), BOLD),
        paint(&format!("\"{}\"", query), YELLOW)
    );
    println!();

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>2}. {} {}",
            rank + 1,
            kind_badge(result.kind),
            paint(&result.primary, BOLD)
        );
        println!("    {}", paint(&preview_text(&result.secondary), DIM));
        println!(
            "    {}",
            paint(
                &format!("score {:.1} → {}", result.score, result.source.as_str()),
                DIM
            )
        );
    }
}

/// Print the distinct "no results" panel for a non-empty query.
pub fn print_no_results(query: &str) {
    println!("{}", paint("No results", BOLD));
    println!("Nothing matched \"{}\".", query);
    println!("Try different words or browse the sections instead.");
}

/// Print corpus statistics for the inspect command.
pub fn print_corpus_stats(corpus: &Corpus) {
    let faq_chars: usize = corpus
        .faq
        .iter()
        .map(|e| e.question.chars().count() + e.answer.chars().count())
        .sum();
    let section_chars: usize = corpus
        .sections
        .iter()
        .map(|e| e.title.chars().count() + e.content.chars().count())
        .sum();

    println!("{}", paint("Corpus", BOLD));
    println!(
        "  faq entries  {:>5}   ({} chars)",
        corpus.faq.len(),
        faq_chars
    );
    println!(
        "  sections     {:>5}   ({} chars)",
        corpus.sections.len(),
        section_chars
    );
    println!("  total items  {:>5}", corpus.len());
}
