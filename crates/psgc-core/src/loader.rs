// crates/psgc-core/src/loader.rs

//! # Dataset loader
//!
//! Handles the physical layer (file I/O, optional gzip) and turns raw table
//! rows into validated [`Record`]s.
//!
//! Row-level problems never abort a load: malformed PSGC codes, duplicate
//! codes, unknown levels and unnameable rows are skipped with a warning so a
//! partial dataset still serves its well-formed majority. A load only fails
//! when zero rows survive.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashSet;
use log::{info, warn};

use crate::config::MatchConfig;
use crate::error::{PsgcError, Result};
use crate::model::{Level, Record, RecordRaw};

/// Load and validate records from a CSV table with a header row
/// (`code,region,province,city,name,level`; `municipality` and `barangay`
/// are accepted as column aliases).
pub fn load_csv_path(path: impl AsRef<Path>, config: &MatchConfig) -> Result<Vec<Record>> {
    let reader = open_stream(path.as_ref())?;
    load_csv_reader(reader, config)
}

/// Same as [`load_csv_path`] but from any reader (tests, in-memory tables).
pub fn load_csv_reader<R: Read>(reader: R, config: &MatchConfig) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, result) in csv_reader.deserialize::<RecordRaw>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            // One unparseable line is a skip, not a failure.
            Err(e) => warn!("skipping unparseable CSV row {}: {e}", line + 2),
        }
    }
    into_records(rows, config)
}

/// Load and validate records from a JSON array of row objects.
#[cfg(feature = "json")]
pub fn load_json_path(path: impl AsRef<Path>, config: &MatchConfig) -> Result<Vec<Record>> {
    let reader = open_stream(path.as_ref())?;
    load_json_reader(reader, config)
}

#[cfg(feature = "json")]
pub fn load_json_reader<R: Read>(reader: R, config: &MatchConfig) -> Result<Vec<Record>> {
    let rows: Vec<RecordRaw> = serde_json::from_reader(reader)?;
    into_records(rows, config)
}

/// Opens a file, buffers it, and transparently unzips `.gz` inputs when the
/// `compact` feature is on. Returns a generic reader so callers don't care
/// about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PsgcError::NotFound(format!("dataset not found at {}: {e}", path.display()))
    })?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

/// Validate raw rows and attach the cached normalized name.
///
/// `config.ngram_len` decides the shingle length baked into each record; the
/// snapshot that indexes these records must be built with the same config.
pub fn into_records(rows: Vec<RecordRaw>, config: &MatchConfig) -> Result<Vec<Record>> {
    let mut seen_codes: AHashSet<String> = AHashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for row in rows {
        if row.code.is_empty() || !row.code.bytes().all(|b| b.is_ascii_digit()) {
            warn!("skipping row with malformed PSGC code {:?} ({:?})", row.code, row.name);
            skipped += 1;
            continue;
        }
        if !seen_codes.insert(row.code.clone()) {
            warn!("skipping duplicate PSGC code {:?} ({:?})", row.code, row.name);
            skipped += 1;
            continue;
        }
        let Some(level) = Level::parse(&row.level) else {
            warn!("skipping row {:?} with unknown level {:?}", row.code, row.level);
            skipped += 1;
            continue;
        };
        let record = Record::from_raw(row, level, config.ngram_len);
        if record.normalized().is_empty() {
            warn!("skipping row {:?}: name is empty after normalization", record.code);
            skipped += 1;
            continue;
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(PsgcError::EmptyDataset);
    }
    if skipped > 0 {
        warn!("dataset loaded with {skipped} skipped rows, {} kept", records.len());
    } else {
        info!("dataset loaded: {} records", records.len());
    }
    Ok(records)
}
