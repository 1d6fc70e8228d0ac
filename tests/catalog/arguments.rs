//! Integration tests for argument validation

use uniques_catalog::ArgumentKind;
use uniques_foundation::{NameCategory, RulesetNames, Severity};

fn ruleset() -> RulesetNames {
    RulesetNames::new()
        .with(NameCategory::Unit, ["Warrior", "Great General"])
        .with(NameCategory::UnitType, ["Mounted"])
        .with(NameCategory::Promotion, ["Shock I"])
        .with(NameCategory::Building, ["Monument"])
        .with(NameCategory::Terrain, ["Grassland", "Hill"])
        .with(NameCategory::Resource, ["Iron"])
        .with(NameCategory::Nation, ["Rome"])
}

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn token_names_round_trip() {
    for kind in ArgumentKind::ALL.iter().copied() {
        match kind.token_name() {
            Some(token) => assert_eq!(ArgumentKind::from_token(token), kind),
            None => assert_eq!(kind, ArgumentKind::Unknown),
        }
    }
}

#[test]
fn unmapped_token_is_unknown_and_accepts_anything() {
    let kind = ArgumentKind::from_token("populationFilter");
    assert_eq!(kind, ArgumentKind::Unknown);
    assert_eq!(kind.validate("Specialists", &RulesetNames::new()), None);
    assert_eq!(kind.validate("", &RulesetNames::new()), None);
}

// =============================================================================
// Numbers and stats
// =============================================================================

#[test]
fn numeric_kinds() {
    let ruleset = RulesetNames::new();
    assert_eq!(ArgumentKind::Number.validate("25", &ruleset), None);
    assert_eq!(ArgumentKind::Number.validate("-3", &ruleset), None);
    assert_eq!(
        ArgumentKind::Number.validate("abc", &ruleset),
        Some(Severity::RulesetInvariant)
    );
    assert_eq!(ArgumentKind::RelativeNumber.validate("+10", &ruleset), None);
    assert_eq!(
        ArgumentKind::PositiveNumber.validate("0", &ruleset),
        Some(Severity::RulesetInvariant)
    );
    assert_eq!(
        ArgumentKind::RelativeNumber.validate("1.5", &ruleset),
        Some(Severity::RulesetInvariant)
    );
    assert_eq!(ArgumentKind::Fraction.validate("0.5", &ruleset), None);
    assert!(ArgumentKind::Fraction.validate("1.5", &ruleset).is_some());
}

#[test]
fn stats_kinds() {
    let ruleset = RulesetNames::new();
    assert_eq!(ArgumentKind::Stats.validate("+1 Gold, +1 Culture", &ruleset), None);
    assert_eq!(
        ArgumentKind::Stats.validate("1 Gold", &ruleset),
        Some(Severity::RulesetInvariant)
    );
    assert_eq!(ArgumentKind::StatName.validate("Faith", &ruleset), None);
    assert!(ArgumentKind::StatName.validate("Mana", &ruleset).is_some());
}

// =============================================================================
// Names and filters
// =============================================================================

#[test]
fn names_depend_on_the_ruleset() {
    let ruleset = ruleset();
    assert_eq!(ArgumentKind::UnitName.validate("Warrior", &ruleset), None);
    assert_eq!(
        ArgumentKind::UnitName.validate("Dragon", &ruleset),
        Some(Severity::RulesetSpecific)
    );
    assert_eq!(
        ArgumentKind::UnitName.validate("Warrior", &RulesetNames::new()),
        Some(Severity::RulesetSpecific)
    );
}

#[test]
fn map_unit_filter_accepts_keywords_names_and_promotions() {
    let ruleset = ruleset();
    for filter in ["Melee", "Wounded", "Warrior", "Mounted", "Shock I"] {
        assert_eq!(ArgumentKind::MapUnitFilter.validate(filter, &ruleset), None, "{filter}");
    }
    assert_eq!(
        ArgumentKind::MapUnitFilter.validate("Dragon", &ruleset),
        Some(Severity::RulesetSpecific)
    );
    assert!(ArgumentKind::BaseUnitFilter.validate("Wounded", &ruleset).is_some());
}

#[test]
fn conjunctions_need_every_part() {
    let ruleset = ruleset();
    assert_eq!(ArgumentKind::MapUnitFilter.validate("{Melee} {Wounded}", &ruleset), None);
    assert!(ArgumentKind::MapUnitFilter.validate("{Melee} {Dragon}", &ruleset).is_some());
    assert!(ArgumentKind::MapUnitFilter.validate("{Melee} {}", &ruleset).is_some());
}

#[test]
fn terrain_filter_accepts_resources() {
    let ruleset = ruleset();
    assert_eq!(ArgumentKind::TerrainFilter.validate("Iron", &ruleset), None);
    assert_eq!(ArgumentKind::TerrainFilter.validate("{Hill} {River}", &ruleset), None);
    assert!(ArgumentKind::TerrainFilter.validate("Lava", &ruleset).is_some());
}

#[test]
fn city_filter_failures_are_warnings() {
    let ruleset = ruleset();
    assert_eq!(ArgumentKind::CityFilter.validate("in all cities", &ruleset), None);
    assert_eq!(ArgumentKind::CityFilter.validate("Rome", &ruleset), None);
    assert_eq!(
        ArgumentKind::CityFilter.validate("in cities with pizza", &ruleset),
        Some(Severity::WarningOnly)
    );
}

#[test]
fn comment_must_not_be_blank() {
    let ruleset = RulesetNames::new();
    assert_eq!(ArgumentKind::Comment.validate("anything at all", &ruleset), None);
    assert_eq!(
        ArgumentKind::Comment.validate("  ", &ruleset),
        Some(Severity::WarningOnly)
    );
}
