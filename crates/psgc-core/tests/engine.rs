//! End-to-end tests over the public engine API.

use std::sync::Arc;

use psgc_core::{Engine, Filters, Level, MatchConfig, PsgcError};

const CSV: &str = "\
code,region,province,city,name,level
130000000,National Capital Region,,,National Capital Region,region
137500000,National Capital Region,,,Caloocan City,city
137501001,National Capital Region,,Caloocan City,Bagong Silang,barangay
137501002,National Capital Region,,Caloocan City,Grace Park West,barangay
041000000,Calabarzon,,,Calabarzon,region
042100000,Calabarzon,,,Cavite,province
042105000,Calabarzon,Cavite,,Bacoor City,city
042105001,Calabarzon,Cavite,Bacoor City,Molino,barangay
034900000,Central Luzon,,,Nueva Ecija,province
034917000,Central Luzon,Nueva Ecija,,Penaranda,municipality
034917001,Central Luzon,Nueva Ecija,Penaranda,Poblacion I,barangay
";

fn engine() -> Engine {
    let cfg = MatchConfig::default();
    let records = psgc_core::loader::load_csv_reader(CSV.as_bytes(), &cfg).unwrap();
    Engine::from_records(records, cfg).unwrap()
}

#[test]
fn every_record_matches_itself_exactly() {
    let engine = engine();
    let snap = engine.snapshot();
    for record in snap.records() {
        let hits = engine.match_places(&record.name, 3, &Filters::default()).unwrap();
        assert!(!hits.is_empty(), "no match for {:?}", record.name);
        assert_eq!(hits[0].score, 1.0, "inexact self-match for {:?}", record.name);
        // The record itself must be among the exact matches; a same-named
        // entity may tie above it only with a more specific level.
        assert!(
            hits.iter().any(|h| h.code == record.code),
            "{:?} missing from its own results",
            record.name
        );
    }
}

#[test]
fn historical_spelling_variant_is_tolerated() {
    let hits = engine().match_places("Kalookan City", 1, &Filters::default()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "137500000");
    assert_eq!(hits[0].name, "Caloocan City");
    assert!(hits[0].score > 0.55);
}

#[test]
fn diacritics_fold_both_ways() {
    // The dataset spells it "Penaranda"; a query keeping the ñ must match.
    let hits = engine().match_places("Peñaranda", 1, &Filters::default()).unwrap();
    assert_eq!(hits[0].code, "034917000");
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn empty_query_errors_and_affects_nothing_else() {
    let engine = engine();
    assert!(matches!(
        engine.match_places("", 3, &Filters::default()),
        Err(PsgcError::EmptyQuery)
    ));
    // The engine is still fully usable after the input error.
    assert!(!engine.match_places("Molino", 1, &Filters::default()).unwrap().is_empty());
}

#[test]
fn nonexistent_place_is_empty() {
    let hits = engine().match_places("Zzyzxville", 5, &Filters::default()).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn region_filter_correctness() {
    let hits = engine()
        .match_places("Poblacion", 10, &Filters::region("Central Luzon"))
        .unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h.region == "Central Luzon"));
}

#[test]
fn level_filter_correctness() {
    let hits = engine()
        .match_places("Caloocan", 10, &Filters::level(Level::Barangay))
        .unwrap();
    assert!(hits.iter().all(|h| h.level == Level::Barangay));
}

#[test]
fn top_k_only_appends() {
    let engine = engine();
    let mut previous: Vec<(String, usize)> = Vec::new();
    for k in 1..=6 {
        let hits = engine.match_places("Caloocan", k, &Filters::default()).unwrap();
        let codes: Vec<(String, usize)> = hits.into_iter().map(|h| (h.code, h.rank)).collect();
        assert!(codes.len() >= previous.len());
        assert_eq!(&codes[..previous.len()], &previous[..]);
        previous = codes;
    }
}

#[test]
fn reload_swaps_atomically() {
    let engine = engine();
    let before: Arc<_> = engine.snapshot();

    // Replacement dataset without NCR at all.
    let replacement_csv = "\
code,region,province,city,name,level
042105000,Calabarzon,Cavite,,Bacoor City,city
";
    let cfg = before.config().clone();
    let records = psgc_core::loader::load_csv_reader(replacement_csv.as_bytes(), &cfg).unwrap();
    engine.swap(psgc_core::Snapshot::from_records(records, cfg).unwrap());

    // New queries see the new dataset...
    let hits = engine.match_places("Grace Park West", 3, &Filters::default()).unwrap();
    assert!(hits.is_empty());
    // ...while the snapshot held across the swap still answers from the old.
    let old_hits = before.match_places("Grace Park West", 3, &Filters::default()).unwrap();
    assert_eq!(old_hits[0].code, "137501002");
}

#[test]
fn match_result_serializes_for_transport() {
    let hits = engine().match_places("Bacoor", 1, &Filters::default()).unwrap();
    let json = serde_json::to_string(&hits).unwrap();
    assert!(json.contains("\"code\":\"042105000\""));
    assert!(json.contains("\"level\":\"city_municipality\""));
}
