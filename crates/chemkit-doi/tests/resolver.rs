use std::cell::Cell;

use chemkit_core::{ChemError, ErrorInfo};
use chemkit_doi::{normalize_doi, CacheConfig, DoiMetadata, DoiResolver, ManualClock};
use chrono::{Duration, TimeZone, Utc};

fn record(doi: &str) -> DoiMetadata {
    DoiMetadata {
        doi: doi.to_string(),
        title: "Optical properties and electronic structure of amorphous germanium".into(),
        authors: vec!["J. Tauc".into(), "R. Grigorovici".into(), "A. Vancu".into()],
        journal: Some("physica status solidi (b)".into()),
        year: Some(1966),
    }
}

#[test]
fn doi_forms_normalize_to_one_key() {
    let expected = "10.1002/pssb.19660150224";
    for raw in [
        "10.1002/pssb.19660150224",
        "  https://doi.org/10.1002/PSSB.19660150224 ",
        "http://dx.doi.org/10.1002/pssb.19660150224",
        "doi: 10.1002/pssb.19660150224",
        "DOI:10.1002/pssb.19660150224",
    ] {
        assert_eq!(normalize_doi(raw).expect(raw), expected);
    }
}

#[test]
fn malformed_dois_are_rejected() {
    for raw in ["", "11.1002/x", "10.1002", "10./abc", "10.abc/x", "10.1002/", "10.1002/a b"] {
        let err = normalize_doi(raw).unwrap_err();
        assert_eq!(err.info().code, "invalid-doi", "input {raw:?}");
    }
}

#[test]
fn fresh_records_are_served_from_cache() {
    let calls = Cell::new(0usize);
    let source = |doi: &str| -> Result<DoiMetadata, ChemError> {
        calls.set(calls.get() + 1);
        Ok(record(doi))
    };
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    let mut resolver =
        DoiResolver::with_clock(source, &clock, &CacheConfig::default()).expect("resolver");

    let first = resolver.resolve("doi:10.1002/pssb.19660150224").expect("first");
    let second = resolver.resolve("https://doi.org/10.1002/pssb.19660150224").expect("second");
    assert_eq!(first, second);
    assert_eq!(calls.get(), 1);

    clock.advance(Duration::hours(25));
    resolver.resolve("10.1002/pssb.19660150224").expect("refetch");
    assert_eq!(calls.get(), 2);
    let stats = resolver.stats();
    assert_eq!((stats.hits, stats.misses, stats.expirations), (1, 2, 1));
}

#[test]
fn source_failures_are_not_cached() {
    let calls = Cell::new(0usize);
    let source = |_: &str| -> Result<DoiMetadata, ChemError> {
        calls.set(calls.get() + 1);
        Err(ChemError::Cache(ErrorInfo::new("source-unavailable", "offline")))
    };
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    let mut resolver =
        DoiResolver::with_clock(source, &clock, &CacheConfig::default()).expect("resolver");
    for _ in 0..2 {
        let err = resolver.resolve("10.1000/xyz123").unwrap_err();
        assert_eq!(err.info().code, "source-unavailable");
    }
    assert_eq!(calls.get(), 2);
    assert!(resolver.cache().is_empty());
}

#[test]
fn resolver_canonicalizes_returned_doi() {
    let source = |_: &str| -> Result<DoiMetadata, ChemError> { Ok(record("10.1002/PSSB.19660150224")) };
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    let config = CacheConfig {
        capacity: 1,
        ttl_seconds: 60,
    };
    let mut resolver = DoiResolver::with_clock(source, &clock, &config).expect("resolver");
    let metadata = resolver.resolve("10.1002/pssb.19660150224").expect("resolve");
    assert_eq!(metadata.doi, "10.1002/pssb.19660150224");
    resolver.resolve("10.1000/other").expect("second key");
    assert_eq!(resolver.stats().evictions, 1);

    clock.advance(Duration::seconds(120));
    assert_eq!(resolver.purge_expired(), 1);
}

#[test]
fn metadata_serializes_without_empty_optionals() {
    let metadata = DoiMetadata {
        journal: None,
        year: None,
        ..record("10.1000/xyz")
    };
    let json = serde_json::to_value(&metadata).expect("json");
    assert!(json.get("journal").is_none());
    assert_eq!(json["authors"].as_array().map(Vec::len), Some(3));
}
