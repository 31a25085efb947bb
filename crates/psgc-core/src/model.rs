// crates/psgc-core/src/model.rs

use serde::{Deserialize, Serialize};

use crate::text::{fold_key, NormalizedName};

/// Administrative hierarchy level of a PSGC record.
///
/// `Ord` ranks by specificity: `Region < Province < CityMunicipality <
/// Barangay`. The ranker uses this to prefer the most specific entity on a
/// score tie.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Region,
    Province,
    CityMunicipality,
    Barangay,
}

impl Level {
    /// Parse the dataset's level column. Accepts the spellings seen in
    /// published PSGC tables; returns `None` for anything else so the loader
    /// can skip the row with a warning.
    pub fn parse(s: &str) -> Option<Self> {
        match fold_key(s).as_str() {
            "region" | "reg" => Some(Level::Region),
            "province" | "prov" => Some(Level::Province),
            "city" | "municipality" | "city municipality" | "mun" | "city mun" => {
                Some(Level::CityMunicipality)
            }
            "barangay" | "bgy" | "brgy" => Some(Level::Barangay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Region => "region",
            Level::Province => "province",
            Level::CityMunicipality => "city_municipality",
            Level::Barangay => "barangay",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw row structure as it comes from the source table (CSV or JSON).
///
/// NOTE: this type mirrors the external dataset; it is validated and converted
/// into [`Record`] by the loader and is not part of the query API.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRaw {
    pub code: String,
    pub region: String,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default, alias = "municipality", alias = "city_municipality")]
    pub city: Option<String>,
    #[serde(alias = "barangay")]
    pub name: String,
    pub level: String,
}

/// One validated, immutable PSGC record.
///
/// The PSGC `code` is globally unique and hierarchical: a child's code is
/// prefixed by its parent's code. `name` is the entity's own name (the
/// barangay name for a barangay row, the city name for a city row, ...);
/// `region` / `province` / `city` carry the containing areas.
///
/// The folded name and its shingles are computed once at load and cached
/// here, never recomputed, so the index and the query path always compare
/// like with like.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub code: String,
    pub region: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub name: String,
    pub level: Level,
    #[serde(skip)]
    pub(crate) normalized: NormalizedName,
    #[serde(skip)]
    pub(crate) region_key: String,
}

impl Record {
    /// Build a record from a validated raw row. `ngram_len` must match the
    /// snapshot configuration the record will be indexed under.
    pub(crate) fn from_raw(raw: RecordRaw, level: Level, ngram_len: usize) -> Self {
        let normalized = NormalizedName::new(&raw.name, ngram_len);
        let region_key = fold_key(&raw.region);
        Record {
            code: raw.code,
            region: raw.region,
            province: raw.province,
            city: raw.city,
            name: raw.name,
            level,
            normalized,
            region_key,
        }
    }

    /// Cached folded form of the record name.
    pub fn normalized(&self) -> &NormalizedName {
        &self.normalized
    }
}

/// Simple aggregate statistics for one snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub regions: usize,
    pub provinces: usize,
    pub cities: usize,
    pub barangays: usize,
}

impl DbStats {
    pub fn total(&self) -> usize {
        self.regions + self.provinces + self.cities + self.barangays
    }
}
