pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dalil",
    about = "Relevance search over FAQ and section snapshots",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus snapshot for a query
    Search {
        /// Path to corpus JSON (faq entries + sections)
        #[arg(short, long)]
        corpus: String,

        /// Query text
        query: String,

        /// Show at most this many results (the engine caps at 10 regardless)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Strip diacritics from corpus text before scoring
        #[cfg(feature = "unicode-normalization")]
        #[arg(long)]
        strip_diacritics: bool,
    },

    /// Show corpus statistics
    Inspect {
        /// Path to corpus JSON
        #[arg(short, long)]
        corpus: String,
    },
}
