//! Integration tests for the ruleset capability

use uniques_foundation::{NameCategory, Ruleset, RulesetNames};

/// A ruleset that knows every name, to check the trait works for custom impls.
struct Everything;

impl Ruleset for Everything {
    fn exists(&self, _category: NameCategory, _name: &str) -> bool {
        true
    }
}

#[test]
fn names_are_case_sensitive() {
    let ruleset = RulesetNames::new().with(NameCategory::Unit, ["Warrior"]);
    assert!(ruleset.exists(NameCategory::Unit, "Warrior"));
    assert!(!ruleset.exists(NameCategory::Unit, "warrior"));
}

#[test]
fn exists_in_any_checks_each_category() {
    let ruleset = RulesetNames::new()
        .with(NameCategory::Technology, ["Bronze Working"])
        .with(NameCategory::Building, ["Monument"]);
    let categories = [NameCategory::Technology, NameCategory::Building];
    assert!(ruleset.exists_in_any(&categories, "Monument"));
    assert!(ruleset.exists_in_any(&categories, "Bronze Working"));
    assert!(!ruleset.exists_in_any(&categories, "Iron"));
    assert!(!ruleset.exists_in_any(&[], "Monument"));
}

#[test]
fn insert_reports_novelty() {
    let mut ruleset = RulesetNames::new();
    assert!(ruleset.insert(NameCategory::Era, "Ancient era"));
    assert!(!ruleset.insert(NameCategory::Era, "Ancient era"));
    assert_eq!(ruleset.len(), 1);
}

#[test]
fn trait_objects_and_references_work() {
    let ruleset = RulesetNames::new().with(NameCategory::Resource, ["Iron"]);
    let dynamic: &dyn Ruleset = &ruleset;
    assert!(dynamic.exists(NameCategory::Resource, "Iron"));
    assert!((&ruleset).exists(NameCategory::Resource, "Iron"));
    assert!(Everything.exists(NameCategory::Nation, "Anyone"));
}

#[test]
fn category_names_round_trip() {
    for category in NameCategory::ALL {
        assert_eq!(category.name().parse::<NameCategory>().unwrap(), category);
    }
}
