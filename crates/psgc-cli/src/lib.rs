//! psgc-cli
//! ========
//!
//! Command-line interface for the `psgc-core` place-name matcher.
//!
//! This crate primarily provides a binary (`psgc-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! psgc-cli --help
//! psgc-cli --input psgc.csv stats
//! psgc-cli --input psgc.csv match "Kalookan City" --top 3
//! ```
//!
//! For programmatic access to the matching engine, use the `psgc-core` crate
//! directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
