use std::path::Path;

use clap::Parser;

use dalil::{load_corpus, search};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            json,
            #[cfg(feature = "unicode-normalization")]
            strip_diacritics,
        } => run_search(
            &corpus,
            &query,
            limit,
            json,
            #[cfg(feature = "unicode-normalization")]
            strip_diacritics,
        ),
        Commands::Inspect { corpus } => run_inspect(&corpus),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_search(
    corpus_path: &str,
    query: &str,
    limit: Option<usize>,
    json: bool,
    #[cfg(feature = "unicode-normalization")] strip_diacritics: bool,
) -> Result<(), String> {
    let corpus = load_corpus(Path::new(corpus_path))?;

    #[cfg(feature = "unicode-normalization")]
    let corpus = if strip_diacritics {
        corpus.without_diacritics()
    } else {
        corpus
    };

    let mut results = search(&corpus, query);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", rendered);
    } else if results.is_empty() {
        // An empty query clears results rather than reporting "no results".
        if !query.trim().is_empty() {
            display::print_no_results(query);
        }
    } else {
        display::print_results(query, &results);
    }

    Ok(())
}

fn run_inspect(corpus_path: &str) -> Result<(), String> {
    let corpus = load_corpus(Path::new(corpus_path))?;
    display::print_corpus_stats(&corpus);
    Ok(())
}
