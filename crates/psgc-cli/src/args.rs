use clap::{Parser, Subcommand};

/// CLI arguments for psgc-cli
#[derive(Debug, Parser)]
#[command(
    name = "psgc",
    version,
    about = "CLI for querying the PSGC place-name matcher"
)]
pub struct CliArgs {
    /// Path to the PSGC table (.csv, .json, or gzipped variants)
    #[arg(short = 'i', long = "input", global = true, default_value = "psgc.csv")]
    pub input: String,

    /// Shingle length for the n-gram index
    #[arg(long = "ngram-len", global = true, default_value_t = 3)]
    pub ngram_len: usize,

    /// Minimum acceptance score in [0,1]
    #[arg(long = "min-score", global = true, default_value_t = 0.55)]
    pub min_score: f64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List all regions
    Regions,

    /// Look up a record by its PSGC code
    Lookup {
        /// PSGC code (e.g. 137501000)
        code: String,
    },

    /// Match a free-text place name
    Match {
        /// The place name to resolve (e.g. "Kalookan City")
        query: String,

        /// Number of results to return
        #[arg(short = 'k', long = "top", default_value_t = 5)]
        top_k: usize,

        /// Restrict to one level (region|province|city_municipality|barangay)
        #[arg(short = 'l', long = "level")]
        level: Option<String>,

        /// Restrict to one region (name, case/diacritic-insensitive)
        #[arg(short = 'r', long = "region")]
        region: Option<String>,
    },
}
