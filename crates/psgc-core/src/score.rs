// crates/psgc-core/src/score.rs

//! # Similarity scoring
//!
//! Two base measures are blended:
//!
//! - a character-level similarity derived from Levenshtein distance, which
//!   absorbs typos ("Kalookan" vs "Caloocan"), and
//! - a token-order-aware Jaro-Winkler, which absorbs word swaps
//!   ("City Caloocan" vs "Caloocan City").
//!
//! Every scorer is a pure, total function over two normalized names: any pair
//! of inputs produces a value in `[0, 1]`, identical keys produce exactly 1.0,
//! and identical inputs always reproduce the same score.

use crate::text::NormalizedName;

/// Scoring strategy. A closed set of variants selected by configuration;
/// the blend weight is policy, not structure, and lives in [`crate::MatchConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scoring {
    /// Normalized Levenshtein similarity over the folded keys.
    EditDistance,
    /// Token-order-aware Jaro-Winkler over the folded keys.
    TokenSimilarity,
    /// `edit_weight * EditDistance + (1 - edit_weight) * TokenSimilarity`.
    Blended {
        /// Share of the edit-distance component, clamped to `[0, 1]`.
        edit_weight: f64,
    },
}

impl Default for Scoring {
    fn default() -> Self {
        // Place-name variants are mostly prefix-preserving respellings, so
        // the Jaro-Winkler side carries the larger share.
        Scoring::Blended { edit_weight: 0.4 }
    }
}

impl Scoring {
    /// Similarity of `query` and `candidate` in `[0, 1]`.
    pub fn score(&self, query: &NormalizedName, candidate: &NormalizedName) -> f64 {
        if query.key == candidate.key {
            return 1.0;
        }
        match *self {
            Scoring::EditDistance => edit_similarity(&query.key, &candidate.key),
            Scoring::TokenSimilarity => token_similarity(query, candidate),
            Scoring::Blended { edit_weight } => {
                let w = edit_weight.clamp(0.0, 1.0);
                w * edit_similarity(&query.key, &candidate.key)
                    + (1.0 - w) * token_similarity(query, candidate)
            }
        }
    }
}

/// `1 - levenshtein / max_len`, so 1.0 means equal and 0.0 means nothing in
/// common at all.
fn edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let dist = strsim::levenshtein(a, b);
    1.0 - dist as f64 / max_len as f64
}

/// Whole-string Jaro-Winkler, lifted by the best per-token alignment so that
/// transposed words still score high.
///
/// The alignment averages, for each token of one side, its best Jaro-Winkler
/// match on the other side, symmetrically in both directions; extra tokens on
/// either side pull the average down.
fn token_similarity(q: &NormalizedName, c: &NormalizedName) -> f64 {
    let whole = strsim::jaro_winkler(&q.key, &c.key);
    if q.tokens.is_empty() || c.tokens.is_empty() {
        return whole;
    }
    let aligned = (directional_alignment(&q.tokens, &c.tokens)
        + directional_alignment(&c.tokens, &q.tokens))
        / 2.0;
    whole.max(aligned)
}

fn directional_alignment(from: &[String], to: &[String]) -> f64 {
    let sum: f64 = from
        .iter()
        .map(|ft| {
            to.iter()
                .map(|tt| strsim::jaro_winkler(ft, tt))
                .fold(0.0, f64::max)
        })
        .sum();
    sum / from.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NormalizedName {
        NormalizedName::new(s, 3)
    }

    #[test]
    fn exact_match_scores_one() {
        for strategy in [
            Scoring::EditDistance,
            Scoring::TokenSimilarity,
            Scoring::default(),
        ] {
            assert_eq!(strategy.score(&name("Caloocan City"), &name("caloocan-city")), 1.0);
        }
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let cases = [
            ("", "caloocan"),
            ("x", "caloocan city"),
            ("zzyzxville", "caloocan city"),
            ("kalookan city", "caloocan city"),
        ];
        for (a, b) in cases {
            for strategy in [
                Scoring::EditDistance,
                Scoring::TokenSimilarity,
                Scoring::Blended { edit_weight: 0.4 },
            ] {
                let s = strategy.score(&name(a), &name(b));
                assert!((0.0..=1.0).contains(&s), "{a:?} vs {b:?} -> {s}");
            }
        }
    }

    #[test]
    fn historical_spelling_scores_high() {
        let s = Scoring::default().score(&name("Kalookan City"), &name("Caloocan City"));
        assert!(s > 0.8, "got {s}");
    }

    #[test]
    fn word_swap_is_tolerated() {
        let s = Scoring::default().score(&name("City of Caloocan"), &name("Caloocan City"));
        let unrelated = Scoring::default().score(&name("Zzyzxville"), &name("Caloocan City"));
        assert!(s > 0.6, "got {s}");
        assert!(s > unrelated, "swap {s} vs unrelated {unrelated}");
    }

    #[test]
    fn blend_weight_is_clamped() {
        let over = Scoring::Blended { edit_weight: 7.0 };
        let pure = Scoring::EditDistance;
        let (a, b) = (name("kalookan"), name("caloocan"));
        assert!((over.score(&a, &b) - pure.score(&a, &b)).abs() < 1e-12);
    }

    #[test]
    fn scoring_is_deterministic() {
        let (a, b) = (name("santa rosa"), name("sta rosa city"));
        let s1 = Scoring::default().score(&a, &b);
        let s2 = Scoring::default().score(&a, &b);
        assert_eq!(s1, s2);
    }
}
