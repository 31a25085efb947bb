// crates/psgc-core/src/config.rs

use crate::score::Scoring;

/// Tunable matching policy for one snapshot.
///
/// Every knob here is policy, not structure: changing a value changes which
/// candidates surface and how they score, never whether the engine works. The
/// defaults are documented per field so scores are reproducible across runs.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Shingle length for the inverted index. Default 3 (trigrams).
    pub ngram_len: usize,
    /// Minimum shared shingles for a candidate to survive generation.
    /// Default 1.
    pub min_shared: usize,
    /// For queries with fewer than [`MatchConfig::short_query_shingles`]
    /// distinct shingles, require this shared/query-shingle ratio instead of
    /// `min_shared`. Default 0.5.
    pub min_overlap_ratio: f64,
    /// Queries below this many distinct shingles use the ratio rule.
    /// Default 4.
    pub short_query_shingles: usize,
    /// Hard cap on the candidate set handed to the scorer; the
    /// highest-overlap candidates are kept when truncating. Default 512.
    pub max_candidates: usize,
    /// Similarity strategy. Default `Blended { edit_weight: 0.4 }`.
    pub scoring: Scoring,
    /// Acceptance threshold: results scoring below this are dropped rather
    /// than returned. Default 0.55.
    pub min_score: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ngram_len: 3,
            min_shared: 1,
            min_overlap_ratio: 0.5,
            short_query_shingles: 4,
            max_candidates: 512,
            scoring: Scoring::default(),
            min_score: 0.55,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_ngram_len(mut self, n: usize) -> Self {
        self.ngram_len = n.clamp(1, 8);
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_clamp_out_of_range_values() {
        let cfg = MatchConfig::default()
            .with_ngram_len(99)
            .with_min_score(2.0)
            .with_max_candidates(0);
        assert_eq!(cfg.ngram_len, 8);
        assert_eq!(cfg.min_score, 1.0);
        assert_eq!(cfg.max_candidates, 1);
    }
}
