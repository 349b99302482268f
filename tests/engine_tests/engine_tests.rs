//! Tests for QueryEngine
//!
//! These tests verify:
//! - Substring search order and case sensitivity
//! - Diff mismatch counting and missing-name reporting
//! - Mode tie-breaking and the no-letter sentinel
//! - Command execution into responses

use genequery::engine::{DiffOutcome, MissingNames, ModeOutcome, SearchHit};
use genequery::protocol::{Command, Response};
use genequery::store::Row;
use genequery::{QueryEngine, RecordStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store() -> RecordStore {
    RecordStore::load(vec![
        Row::new("P1", "Homo sapiens", "3A2B"),
        Row::new("P2", "Mus musculus", "2C3AB"),
        Row::new("P3", "Gallus gallus", "3ACBB"),
        Row::new("P4", "Danio rerio", "2A2B"),
        Row::new("P5", "Xenopus laevis", "12-"),
    ])
}

fn hit(organism: &str, protein: &str) -> SearchHit {
    SearchHit {
        organism: organism.to_string(),
        protein: protein.to_string(),
    }
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_returns_matches_in_store_order() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    let hits = engine.search("AAA");
    assert_eq!(
        hits,
        vec![
            hit("Homo sapiens", "P1"),
            hit("Mus musculus", "P2"),
            hit("Gallus gallus", "P3"),
        ]
    );
}

#[test]
fn test_search_no_match() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);
    assert!(engine.search("ZZZ").is_empty());
}

#[test]
fn test_search_is_case_sensitive() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);
    assert!(engine.search("aaa").is_empty());
}

#[test]
fn test_search_sees_shadowed_duplicates() {
    let store = RecordStore::load(vec![
        Row::new("P1", "Old", "MKV"),
        Row::new("p1", "New", "MKVL"),
    ]);
    let engine = QueryEngine::new(&store);

    assert_eq!(engine.search("MKV"), vec![hit("Old", "P1"), hit("New", "p1")]);
}

// =============================================================================
// Diff Tests
// =============================================================================

#[test]
fn test_diff_counts_mismatch_and_length() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    // AAABB vs AAACBB: one mismatch at index 3, plus one extra char
    assert_eq!(engine.diff("P1", "P3"), DiffOutcome::Distance(2));
}

#[test]
fn test_diff_identical_is_zero() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);
    assert_eq!(engine.diff("P1", "p1"), DiffOutcome::Distance(0));
}

#[test]
fn test_diff_is_symmetric() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);
    assert_eq!(engine.diff("P2", "P4"), engine.diff("P4", "P2"));
}

#[test]
fn test_diff_first_missing() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    let outcome = engine.diff("Px", "P1");
    assert_eq!(
        outcome,
        DiffOutcome::Missing(MissingNames::First("Px".to_string()))
    );
    match outcome {
        DiffOutcome::Missing(missing) => assert_eq!(missing.names(), vec!["Px"]),
        _ => panic!("Expected missing outcome"),
    }
}

#[test]
fn test_diff_second_missing() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);
    assert_eq!(
        engine.diff("P1", "Py"),
        DiffOutcome::Missing(MissingNames::Second("Py".to_string()))
    );
}

#[test]
fn test_diff_both_missing() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    match engine.diff("Px", "Py") {
        DiffOutcome::Missing(missing) => assert_eq!(missing.names(), vec!["Px", "Py"]),
        other => panic!("Expected missing outcome, got {:?}", other),
    }
}

// =============================================================================
// Mode Tests
// =============================================================================

#[test]
fn test_mode_highest_count() {
    let store = RecordStore::load(vec![Row::new("P1", "Org", "AA3B")]);
    let engine = QueryEngine::new(&store);
    assert_eq!(
        engine.mode("P1"),
        ModeOutcome::Found { symbol: 'B', count: 3 }
    );
}

#[test]
fn test_mode_tie_picks_smallest_symbol() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    // AABB
    assert_eq!(
        engine.mode("P4"),
        ModeOutcome::Found { symbol: 'A', count: 2 }
    );
}

#[test]
fn test_mode_tie_independent_of_order() {
    let store = RecordStore::load(vec![Row::new("P1", "Org", "2Z2M")]);
    let engine = QueryEngine::new(&store);
    assert_eq!(
        engine.mode("P1"),
        ModeOutcome::Found { symbol: 'M', count: 2 }
    );
}

#[test]
fn test_mode_no_letters() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    // "12-" decodes to "2-"
    assert_eq!(engine.mode("P5"), ModeOutcome::NoSymbol);
}

#[test]
fn test_mode_missing() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);
    assert_eq!(engine.mode("P9"), ModeOutcome::Missing("P9".to_string()));
}

// =============================================================================
// Command Execution Tests
// =============================================================================

#[test]
fn test_execute_search() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    let response = engine.execute(&Command::Search {
        pattern: "CCA".to_string(),
    });
    assert_eq!(response, Response::Hits(vec![hit("Mus musculus", "P2")]));
}

#[test]
fn test_execute_diff_missing() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    let response = engine.execute(&Command::Diff {
        first: "Px".to_string(),
        second: "Py".to_string(),
    });
    assert_eq!(
        response,
        Response::Missing(vec!["Px".to_string(), "Py".to_string()])
    );
}

#[test]
fn test_execute_mode() {
    let store = setup_store();
    let engine = QueryEngine::new(&store);

    let response = engine.execute(&Command::Mode {
        protein: "p1".to_string(),
    });
    assert_eq!(response, Response::Mode { symbol: 'A', count: 3 });
}
