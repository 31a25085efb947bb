// crates/psgc-core/src/index.rs

//! # N-gram inverted index
//!
//! Maps each shingle of a record's folded name to the ids of the records
//! containing it. Built once per snapshot and read-only afterwards.
//!
//! Candidate generation accumulates shared-shingle counts per record id and
//! keeps only candidates over the overlap threshold, so the per-query cost is
//! O(candidates), never O(records).

use ahash::AHashMap;

use crate::config::MatchConfig;
use crate::model::Record;
use crate::text::NormalizedName;

/// Immutable shingle -> posting-list index over one record set.
///
/// Record ids are positions in the snapshot's record vector; posting lists
/// are sorted ascending because ids are appended in build order.
#[derive(Debug, Clone)]
pub struct NgramIndex {
    ngram_len: usize,
    postings: AHashMap<String, Vec<u32>>,
}

impl NgramIndex {
    /// Index every record's cached shingles. Records whose names were
    /// normalized with a different shingle length would silently miss, which
    /// is why the loader and the snapshot share one [`MatchConfig`].
    pub fn build(records: &[Record], ngram_len: usize) -> Self {
        let mut postings: AHashMap<String, Vec<u32>> = AHashMap::new();
        for (id, record) in records.iter().enumerate() {
            for gram in &record.normalized().ngrams {
                postings.entry(gram.clone()).or_default().push(id as u32);
            }
        }
        Self { ngram_len, postings }
    }

    pub fn ngram_len(&self) -> usize {
        self.ngram_len
    }

    /// Number of distinct shingles in the index.
    pub fn distinct_ngrams(&self) -> usize {
        self.postings.len()
    }

    /// Record ids sharing enough shingles with `query`, with their
    /// shared-shingle counts. Unordered unless truncation applied; the ranker
    /// re-sorts with full tie-breaking either way.
    pub fn candidates(&self, query: &NormalizedName, policy: &MatchConfig) -> Vec<(u32, usize)> {
        let query_grams = &query.ngrams;
        if query_grams.is_empty() {
            return Vec::new();
        }

        let mut counts: AHashMap<u32, usize> = AHashMap::new();
        for gram in query_grams {
            if let Some(ids) = self.postings.get(gram) {
                for &id in ids {
                    *counts.entry(id).or_insert(0) += 1;
                }
            }
        }

        // Short queries use a ratio rule: one shared trigram out of two is
        // meaningful, one out of twelve is noise.
        let needed = if query_grams.len() < policy.short_query_shingles {
            let by_ratio = (query_grams.len() as f64 * policy.min_overlap_ratio).ceil() as usize;
            by_ratio.max(1)
        } else {
            policy.min_shared.max(1)
        };

        let mut out: Vec<(u32, usize)> = counts
            .into_iter()
            .filter(|&(_, shared)| shared >= needed)
            .collect();

        if out.len() > policy.max_candidates {
            out.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            out.truncate(policy.max_candidates);
        }
        out
    }
}
