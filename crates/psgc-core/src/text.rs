// crates/psgc-core/src/text.rs

//! # Text folding and n-gram generation
//!
//! One normalization function is used for both index build and query time.
//! That symmetry is what makes the n-gram index usable at all: a record name
//! and a query only share shingles if they went through the same folding.

use ahash::AHashSet;
use deunicode::deunicode;

/// Canonical folded form of a place name.
///
/// Lowercases, transliterates diacritics to ASCII ("Peñaranda" -> "penaranda"),
/// treats every non-alphanumeric run as a single space, and trims.
///
/// Pure and idempotent: `fold_key(&fold_key(s)) == fold_key(s)`.
pub fn fold_key(raw: &str) -> String {
    let ascii = deunicode(raw);
    let mut out = String::with_capacity(ascii.len());
    for ch in ascii.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// A folded name plus everything derived from it.
///
/// Computed once per record at snapshot build and cached on the record, and
/// once per query. Never recomputed afterwards, so index and query shingles
/// always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Folded full name, e.g. "caloocan city".
    pub key: String,
    /// Folded words of the name.
    pub tokens: Vec<String>,
    /// Distinct overlapping shingles of `key`, in first-occurrence order.
    pub ngrams: Vec<String>,
}

impl NormalizedName {
    pub fn new(raw: &str, ngram_len: usize) -> Self {
        let key = fold_key(raw);
        let tokens = key
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();
        let ngrams = shingles(&key, ngram_len);
        Self { key, tokens, ngrams }
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Distinct overlapping character shingles of length `n`.
///
/// Names shorter than `n` yield a single right-padded shingle so short place
/// names ("Poy", "Uba") stay indexable instead of vanishing from the index.
pub fn shingles(key: &str, n: usize) -> Vec<String> {
    let n = n.max(1);
    if key.is_empty() {
        return Vec::new();
    }
    // fold_key output is pure ASCII, so byte windows are char windows
    let bytes = key.as_bytes();
    if bytes.len() < n {
        let mut padded = key.to_owned();
        padded.extend(std::iter::repeat(' ').take(n - bytes.len()));
        return vec![padded];
    }
    let mut seen = AHashSet::new();
    let mut out = Vec::new();
    for w in bytes.windows(n) {
        // windows of valid ASCII are valid UTF-8
        let g = std::str::from_utf8(w).expect("fold_key output is ASCII");
        if seen.insert(g) {
            out.push(g.to_owned());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_diacritics_and_punctuation() {
        assert_eq!(fold_key("Peñaranda"), "penaranda");
        assert_eq!(fold_key("  Sta.  Cruz (Pob.) "), "sta cruz pob");
        assert_eq!(fold_key("KALOOKAN-CITY"), "kalookan city");
    }

    #[test]
    fn fold_is_idempotent() {
        for s in ["Peñaranda", "  Sta.  Cruz (Pob.) ", "", "ñ-ñ", "Łódź?!"] {
            let once = fold_key(s);
            assert_eq!(fold_key(&once), once);
        }
    }

    #[test]
    fn empty_and_punctuation_only_fold_to_empty() {
        assert_eq!(fold_key(""), "");
        assert_eq!(fold_key("  ...  !!"), "");
    }

    #[test]
    fn shingles_are_distinct_and_ordered() {
        assert_eq!(shingles("abcab", 3), vec!["abc", "bca", "cab"]);
        assert_eq!(shingles("aaaa", 3), vec!["aaa"]);
    }

    #[test]
    fn short_names_get_one_padded_shingle() {
        assert_eq!(shingles("po", 3), vec!["po "]);
        assert_eq!(shingles("a", 3), vec!["a  "]);
        assert!(shingles("", 3).is_empty());
    }

    #[test]
    fn normalized_name_tokens() {
        let n = NormalizedName::new("Caloocan City", 3);
        assert_eq!(n.key, "caloocan city");
        assert_eq!(n.tokens, vec!["caloocan", "city"]);
        assert!(n.ngrams.contains(&"cal".to_string()));
        assert!(n.ngrams.contains(&"n c".to_string()));
    }
}
