// crates/psgc-core/src/snapshot.rs

//! # Snapshot and engine
//!
//! A [`Snapshot`] is one immutable, self-consistent view of the dataset:
//! records, their cached normalized names, and the n-gram index built from
//! exactly those names. Queries only ever read it.
//!
//! The [`Engine`] holds the current snapshot behind a swappable reference.
//! Reload builds a brand-new snapshot off the hot path and replaces the
//! reference in one step, so in-flight queries keep the snapshot they started
//! with and never observe a partial update.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use log::info;
use parking_lot::RwLock;

use crate::config::MatchConfig;
use crate::error::{PsgcError, Result};
use crate::loader;
use crate::model::{DbStats, Level, Record};
use crate::index::NgramIndex;
use crate::text::fold_key;

/// One immutable dataset view: records + index + the config both were built
/// under.
pub struct Snapshot {
    records: Vec<Record>,
    index: NgramIndex,
    config: MatchConfig,
    by_code: AHashMap<String, u32>,
}

impl Snapshot {
    /// Build a snapshot from validated records. The records must have been
    /// normalized with this same `config` (the `Engine` constructors and the
    /// loader share one config value, which guarantees it).
    pub fn from_records(records: Vec<Record>, config: MatchConfig) -> Result<Self> {
        if records.is_empty() {
            return Err(PsgcError::EmptyDataset);
        }
        let index = NgramIndex::build(&records, config.ngram_len);
        let by_code = records
            .iter()
            .enumerate()
            .map(|(id, r)| (r.code.clone(), id as u32))
            .collect();
        info!(
            "snapshot built: {} records, {} distinct {}-grams",
            records.len(),
            index.distinct_ngrams(),
            index.ngram_len()
        );
        Ok(Self { records, index, config, by_code })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub(crate) fn index(&self) -> &NgramIndex {
        &self.index
    }

    pub fn stats(&self) -> DbStats {
        let mut stats = DbStats { regions: 0, provinces: 0, cities: 0, barangays: 0 };
        for r in &self.records {
            match r.level {
                Level::Region => stats.regions += 1,
                Level::Province => stats.provinces += 1,
                Level::CityMunicipality => stats.cities += 1,
                Level::Barangay => stats.barangays += 1,
            }
        }
        stats
    }

    /// Exact lookup by PSGC code.
    pub fn find_by_code(&self, code: &str) -> Option<&Record> {
        self.by_code
            .get(code.trim())
            .map(|&id| &self.records[id as usize])
    }

    /// All records whose name equals `name` after folding. A name like
    /// "Poblacion" legitimately appears in hundreds of municipalities.
    pub fn find_by_name(&self, name: &str) -> Vec<&Record> {
        let key = fold_key(name);
        if key.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.normalized().key == key)
            .collect()
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.records.iter().map(|r| r.region.as_str()).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Distinct provinces in `region`, plus the highly urbanized cities that
    /// sit directly under the region with no province at all (NCR cities).
    pub fn provinces_in(&self, region: &str) -> Vec<&str> {
        let region_key = fold_key(region);
        let mut out: Vec<&str> = self
            .records
            .iter()
            .filter(|r| r.region_key == region_key)
            .filter_map(|r| match (&r.province, r.level) {
                (Some(p), _) => Some(p.as_str()),
                // A province names itself; an HUC stands in for one.
                (None, Level::Province) | (None, Level::CityMunicipality) => {
                    Some(r.name.as_str())
                }
                _ => None,
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Distinct municipalities/cities under `province` in `region`. When
    /// `province` is itself a highly urbanized city, it is returned back,
    /// usable directly as a municipality.
    pub fn municipalities_in(&self, region: &str, province: &str) -> Vec<&str> {
        let region_key = fold_key(region);
        let province_key = fold_key(province);
        let mut out: Vec<&str> = self
            .records
            .iter()
            .filter(|r| {
                r.region_key == region_key
                    && r.province.as_deref().map(fold_key).as_deref()
                        == Some(province_key.as_str())
            })
            .filter_map(|r| match (r.city.as_deref(), r.level) {
                (Some(c), _) => Some(c),
                // A city/municipality record names itself.
                (None, Level::CityMunicipality) => Some(r.name.as_str()),
                _ => None,
            })
            .collect();
        if out.is_empty() {
            // HUC case: the "province" is a city record of this region.
            if let Some(city) = self.records.iter().find(|r| {
                r.region_key == region_key
                    && r.level == Level::CityMunicipality
                    && r.normalized().key == province_key
            }) {
                return vec![city.name.as_str()];
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Barangay names under a municipality. Records without a province
    /// (HUC barangays) match any `province` argument that folds to their city.
    pub fn barangays_in(&self, region: &str, province: &str, municipality: &str) -> Vec<&str> {
        let region_key = fold_key(region);
        let province_key = fold_key(province);
        let municipality_key = fold_key(municipality);
        let mut out: Vec<&str> = self
            .records
            .iter()
            .filter(|r| r.level == Level::Barangay && r.region_key == region_key)
            .filter(|r| {
                r.city.as_deref().map(fold_key).as_deref() == Some(municipality_key.as_str())
            })
            .filter(|r| match r.province.as_deref() {
                Some(p) => fold_key(p) == province_key,
                // HUC barangay: the city name stands in for the province.
                None => {
                    r.city.as_deref().map(fold_key).as_deref() == Some(province_key.as_str())
                }
            })
            .map(|r| r.name.as_str())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

/// The process-facing entry point: owns the current [`Snapshot`] and swaps it
/// atomically on reload.
///
/// Queries take the read lock only long enough to clone the `Arc`, then run
/// entirely on the immutable snapshot; reload builds the replacement first
/// and holds the write lock for a single pointer swap. Snapshots held by
/// in-flight queries stay alive until their last `Arc` drops.
pub struct Engine {
    current: RwLock<Arc<Snapshot>>,
}

impl Engine {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { current: RwLock::new(Arc::new(snapshot)) }
    }

    pub fn from_records(records: Vec<Record>, config: MatchConfig) -> Result<Self> {
        Ok(Self::new(Snapshot::from_records(records, config)?))
    }

    pub fn from_csv_path(path: impl AsRef<Path>, config: MatchConfig) -> Result<Self> {
        let records = loader::load_csv_path(path, &config)?;
        Self::from_records(records, config)
    }

    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<Path>, config: MatchConfig) -> Result<Self> {
        let records = loader::load_json_path(path, &config)?;
        Self::from_records(records, config)
    }

    /// The current snapshot. Callers may hold the returned `Arc` across many
    /// queries; it stays valid through reloads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Replace the active snapshot. Returns the previous one.
    pub fn swap(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Reload hook: re-read the dataset with the active config and swap the
    /// new snapshot in. On any error the active snapshot stays untouched.
    pub fn reload_from_csv_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let config = self.snapshot().config().clone();
        let records = loader::load_csv_path(path, &config)?;
        self.swap(Snapshot::from_records(records, config)?);
        Ok(())
    }

    #[cfg(feature = "json")]
    pub fn reload_from_json_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let config = self.snapshot().config().clone();
        let records = loader::load_json_path(path, &config)?;
        self.swap(Snapshot::from_records(records, config)?);
        Ok(())
    }
}
