//! Integration tests for Error types
//!
//! Tests error construction, display, and the helper APIs that return them.

use uniques_foundation::{Error, ErrorKind, NameCategory, Stat, Stats};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_stats() {
    let err = Error::invalid_stats("+1", "malformed part `+1`");
    assert!(matches!(err.kind, ErrorKind::InvalidStats { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("+1"));
}

#[test]
fn error_unknown_category() {
    let err = Error::unknown_category("Wonder");
    assert_eq!(format!("{err}"), "unknown ruleset category: Wonder");
}

// =============================================================================
// Errors from helper APIs
// =============================================================================

#[test]
fn stats_parse_reports_malformed_part() {
    let err = Stats::parse("+1 Gold, Production").unwrap_err();
    match err.kind {
        ErrorKind::InvalidStats { text, reason } => {
            assert_eq!(text, "+1 Gold, Production");
            assert!(reason.contains("Production"));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn stat_from_str_reports_unknown_name() {
    let err = "Mana".parse::<Stat>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownStat("Mana".to_string()));
}

#[test]
fn category_from_str_reports_unknown_name() {
    let err = "Wonder".parse::<NameCategory>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCategory("Wonder".to_string()));
}
