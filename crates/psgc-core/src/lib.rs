// crates/psgc-core/src/lib.rs

//! # psgc-core
//!
//! Resolves free-text Philippine place names (barangay, municipality/city,
//! province, region) against the PSGC reference dataset and returns ranked
//! best-match candidates.
//!
//! The dataset is loaded once into an immutable [`Snapshot`] (records plus an
//! n-gram inverted index over their folded names); every query is a bounded
//! synchronous computation over that snapshot. The [`Engine`] holds the
//! active snapshot behind a swappable reference so a reload never disturbs
//! in-flight queries.
//!
//! ```no_run
//! use psgc_core::{Engine, Filters, MatchConfig};
//!
//! fn main() -> psgc_core::Result<()> {
//!     let engine = Engine::from_csv_path("psgc.csv", MatchConfig::default())?;
//!     for hit in engine.match_places("Kalookan City", 3, &Filters::default())? {
//!         println!("{} {} ({:.2})", hit.code, hit.name, hit.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod score;
pub mod search;
pub mod snapshot;
pub mod text;

// Re-exports
pub use crate::config::MatchConfig;
pub use crate::error::{PsgcError, Result};
pub use crate::index::NgramIndex;
pub use crate::model::{DbStats, Level, Record, RecordRaw};
pub use crate::score::Scoring;
pub use crate::search::{Filters, MatchResult};
pub use crate::snapshot::{Engine, Snapshot};
pub use crate::text::{fold_key, NormalizedName};
