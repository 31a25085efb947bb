// crates/psgc-core/src/search.rs

//! # Query path
//!
//! One lookup = normalize -> candidate generation -> scoring -> ranking.
//! Everything here reads a single immutable [`Snapshot`]; there is no shared
//! mutable state between concurrent queries.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{PsgcError, Result};
use crate::model::Level;
use crate::snapshot::Snapshot;
use crate::text::{fold_key, NormalizedName};

/// Optional narrowing of a query.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Only return records at this hierarchy level.
    pub level: Option<Level>,
    /// Only return records in this region (name compared after folding).
    pub region: Option<String>,
}

impl Filters {
    pub fn level(level: Level) -> Self {
        Self { level: Some(level), ..Self::default() }
    }

    pub fn region(region: impl Into<String>) -> Self {
        Self { region: Some(region.into()), ..Self::default() }
    }
}

/// One ranked match. Owned, so callers can hold results past a reload.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub code: String,
    pub name: String,
    pub level: Level,
    pub region: String,
    pub province: Option<String>,
    pub city: Option<String>,
    /// Similarity in `[0, 1]`; 1.0 is an exact folded-name match.
    pub score: f64,
    /// 1-based position in this result list.
    pub rank: usize,
}

impl Snapshot {
    /// Match a free-text place name against this snapshot.
    ///
    /// Returns at most `top_k` results ordered by descending score; ties
    /// break toward the more specific level (barangay over municipality over
    /// province), then by PSGC code ascending, so identical inputs always
    /// produce identical output. Candidates scoring below
    /// `config.min_score` are dropped; no acceptable match is an empty vec,
    /// not an error.
    ///
    /// Filters are applied to the candidate set before scoring.
    ///
    /// # Errors
    ///
    /// [`PsgcError::EmptyQuery`] when `raw_query` folds to nothing.
    pub fn match_places(
        &self,
        raw_query: &str,
        top_k: usize,
        filters: &Filters,
    ) -> Result<Vec<MatchResult>> {
        let config = self.config();
        let query = NormalizedName::new(raw_query, config.ngram_len);
        if query.is_empty() {
            return Err(PsgcError::EmptyQuery);
        }
        let top_k = top_k.max(1);
        let region_key = filters.region.as_deref().map(fold_key);

        let mut scored: Vec<(f64, u32)> = Vec::new();
        for (id, _shared) in self.index().candidates(&query, config) {
            let record = &self.records()[id as usize];
            if let Some(level) = filters.level {
                if record.level != level {
                    continue;
                }
            }
            if let Some(rk) = region_key.as_deref() {
                if record.region_key != rk {
                    continue;
                }
            }
            let score = config.scoring.score(&query, record.normalized());
            if score >= config.min_score {
                scored.push((score, id));
            }
        }

        scored.sort_unstable_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    let ra = &self.records()[a.1 as usize];
                    let rb = &self.records()[b.1 as usize];
                    rb.level.cmp(&ra.level).then_with(|| ra.code.cmp(&rb.code))
                })
        });
        scored.truncate(top_k);

        Ok(scored
            .into_iter()
            .enumerate()
            .map(|(i, (score, id))| {
                let r = &self.records()[id as usize];
                MatchResult {
                    code: r.code.clone(),
                    name: r.name.clone(),
                    level: r.level,
                    region: r.region.clone(),
                    province: r.province.clone(),
                    city: r.city.clone(),
                    score,
                    rank: i + 1,
                }
            })
            .collect())
    }
}

impl crate::snapshot::Engine {
    /// Match against the current snapshot. See [`Snapshot::match_places`].
    pub fn match_places(
        &self,
        raw_query: &str,
        top_k: usize,
        filters: &Filters,
    ) -> Result<Vec<MatchResult>> {
        self.snapshot().match_places(raw_query, top_k, filters)
    }
}
