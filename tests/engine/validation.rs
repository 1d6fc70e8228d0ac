//! Integration tests for batch validation

use uniques_catalog::UniqueType;
use uniques_engine::{IssueKind, Unique, UniqueMap, UniqueValidator, ValidationConfig};
use uniques_foundation::{NameCategory, RulesetNames, Severity};

fn ruleset() -> RulesetNames {
    RulesetNames::new()
        .with(NameCategory::Unit, ["Warrior", "Settler"])
        .with(NameCategory::Building, ["Monument", "Granary"])
        .with(NameCategory::Technology, ["Writing"])
}

fn mod_content() -> UniqueMap {
    [
        "[+1 Culture] from every [Monument]",
        "Free [Great Prophet] appears",
        "[ten] Sight",
        "+[2] Movement",
        "Some flavor text",
        "[+10]% Strength <after discovering [Writing]>",
    ]
    .into_iter()
    .map(Unique::new)
    .collect()
}

#[test]
fn base_ruleset_reports_everything() {
    let ruleset = ruleset();
    let report = UniqueValidator::new(&ruleset).check_map(&mod_content());

    let mut kinds: Vec<_> = report
        .iter()
        .map(|issue| (issue.text.as_str(), issue.severity))
        .collect();
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            ("+[2] Movement", Severity::WarningOnly),
            ("Free [Great Prophet] appears", Severity::RulesetSpecific),
            ("Some flavor text", Severity::WarningOnly),
            ("[ten] Sight", Severity::RulesetInvariant),
        ]
    );
    assert!(report.has_errors());
    assert_eq!(report.worst_severity(), Some(Severity::RulesetInvariant));
}

#[test]
fn mod_only_keeps_invariant_problems() {
    let report = UniqueValidator::with_config(&RulesetNames::new(), ValidationConfig::mod_only())
        .check_map(&mod_content());

    assert!(report.iter().all(|issue| issue.severity != Severity::RulesetSpecific));
    assert!(report.iter().any(|issue| issue.text == "[ten] Sight"));
}

#[test]
fn warnings_can_be_silenced() {
    let ruleset = ruleset();
    let config = ValidationConfig::base_ruleset().with_warnings(false);
    let report = UniqueValidator::with_config(&ruleset, config).check_map(&mod_content());

    assert_eq!(report.len(), 2);
    assert!(report.iter().all(|issue| issue.severity.is_error()));
}

#[test]
fn deprecated_movement_suggests_current_form() {
    let ruleset = ruleset();
    let report = UniqueValidator::new(&ruleset).check_unique(&Unique::new("+[2] Movement"));
    let issue = report.into_iter().next().unwrap();

    assert_eq!(
        issue.kind,
        IssueKind::Deprecated {
            superseded_by: UniqueType::Movement,
            replacement: Some("[2] Movement".to_string()),
        }
    );
}

#[test]
fn conditional_arguments_are_checked() {
    let ruleset = ruleset();
    let unique = Unique::new("[+10]% Strength <after discovering [Sorcery]>");
    let report = UniqueValidator::new(&ruleset).check_unique(&unique);

    assert_eq!(report.len(), 1);
    let issue = report.iter().next().unwrap();
    assert_eq!(issue.text, "after discovering [Sorcery]");
    assert!(matches!(&issue.kind, IssueKind::Argument(error) if error.argument == "Sorcery"));
    assert_eq!(
        issue.to_string(),
        "\"after discovering [Sorcery]\": argument 0 `Sorcery` is not a valid technology"
    );
}

#[test]
fn check_all_accepts_borrowed_uniques() {
    let ruleset = ruleset();
    let uniques = vec![Unique::new("[1] Sight"), Unique::new("Free [Warrior] appears")];
    let report = UniqueValidator::new(&ruleset).check_all(&uniques);
    assert!(report.is_empty());
}
