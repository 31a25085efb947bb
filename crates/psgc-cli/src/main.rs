//! psgc-cli — Command-line interface for psgc-core
//!
//! This binary is a thin operational front end for the matching engine: load
//! a PSGC table, inspect it, and resolve free-text place names from your
//! terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset statistics
//!   $ psgc-cli --input psgc.csv stats
//!
//! - List all regions
//!   $ psgc-cli --input psgc.csv regions
//!
//! - Look up one record by PSGC code
//!   $ psgc-cli --input psgc.csv lookup 137501000
//!
//! - Resolve a misspelled place name
//!   $ psgc-cli --input psgc.csv match "Kalookan City" --top 3
//!
//! - Restrict matches to barangays in one region
//!   $ psgc-cli --input psgc.csv match "Poblacion" -l barangay -r "Central Luzon"
//!
//! Data source
//! -----------
//!
//! `--input` points at the published PSGC table as CSV (default) or, with the
//! `json` feature, a JSON array of row objects. Gzipped files work when the
//! `compact` feature is enabled. Set RUST_LOG=warn to see which rows the
//! loader skipped.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use psgc_core::{Engine, Filters, Level, MatchConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let config = MatchConfig::default()
        .with_ngram_len(args.ngram_len)
        .with_min_score(args.min_score);

    let engine = load_engine(&args.input, config)
        .with_context(|| format!("failed to load dataset from {}", args.input))?;
    let snapshot = engine.snapshot();

    match args.command {
        Commands::Stats => {
            let stats = snapshot.stats();
            println!("Dataset statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Provinces: {}", stats.provinces);
            println!("  Cities/Municipalities: {}", stats.cities);
            println!("  Barangays: {}", stats.barangays);
            println!("  Total: {}", stats.total());
        }

        Commands::Regions => {
            for region in snapshot.regions() {
                println!("{region}");
            }
        }

        Commands::Lookup { code } => match snapshot.find_by_code(&code) {
            Some(record) => {
                println!("Code: {}", record.code);
                println!("Name: {}", record.name);
                println!("Level: {}", record.level);
                println!("Region: {}", record.region);
                println!("Province: {}", record.province.as_deref().unwrap_or("-"));
                println!("City/Municipality: {}", record.city.as_deref().unwrap_or("-"));
            }
            None => eprintln!("No record found for code: {code}"),
        },

        Commands::Match { query, top_k, level, region } => {
            let level = match level.as_deref() {
                Some(raw) => match Level::parse(raw) {
                    Some(level) => Some(level),
                    None => bail!("unknown level {raw:?} (try barangay, city, province, region)"),
                },
                None => None,
            };
            let filters = Filters { level, region };
            let hits = engine.match_places(&query, top_k, &filters)?;
            if hits.is_empty() {
                println!("No match for: {query}");
            } else {
                for hit in hits {
                    let place = [hit.city.as_deref(), hit.province.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!(
                        "{:>2}. [{:.3}] {} {} ({}) {}",
                        hit.rank, hit.score, hit.code, hit.name, hit.level, place
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_engine(input: &str, config: MatchConfig) -> anyhow::Result<Engine> {
    #[cfg(feature = "json")]
    if input.ends_with(".json") || input.ends_with(".json.gz") {
        return Ok(Engine::from_json_path(input, config)?);
    }
    Ok(Engine::from_csv_path(input, config)?)
}
