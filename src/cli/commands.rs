use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute the full pipeline: fetch (or reuse) raw data, clean, scale,
    /// and persist the processed series plus the scaler artifact
    Run {
        /// Path to the run configuration file (pipeline.toml)
        #[arg(short, long)]
        config: String,
    },

    /// Fetch raw daily bars only, without preprocessing
    Fetch {
        /// Ticker symbol (e.g. "AAPL")
        #[arg(long)]
        ticker: String,

        /// Start date in ISO8601 format (e.g. "2015-01-01")
        #[arg(long)]
        start: NaiveDate,

        /// End date in ISO8601 format, inclusive (e.g. "2025-11-29")
        #[arg(short, long)]
        end: NaiveDate,

        /// Directory the raw CSV is written into
        #[arg(long, default_value = "data/raw")]
        out_dir: String,
    },
}
