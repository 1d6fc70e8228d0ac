//! Argument kinds.
//!
//! Every placeholder in a template expects some kind of argument. The kind is
//! derived from the token's name through a fixed registry (`[amount]` is a
//! [`ArgumentKind::Number`], `[unit]` a [`ArgumentKind::UnitName`], and so on).
//! Names the registry does not know become [`ArgumentKind::Unknown`], which
//! accepts anything.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use uniques_foundation::{NameCategory, Ruleset, Severity, Stat, Stats};

use crate::filter::{
    BASE_UNIT_FILTER_KEYWORDS, BUILDING_FILTER_KEYWORDS, CITY_FILTER_KEYWORDS,
    MAP_UNIT_FILTER_KEYWORDS, TERRAIN_FILTER_KEYWORDS, filter_accepts,
};

/// What a placeholder slot expects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// An integer.
    Number,
    /// An integer greater than zero.
    PositiveNumber,
    /// An integer used as a relative change, usually written with a sign.
    RelativeNumber,
    /// A decimal between 0 and 1.
    Fraction,
    /// A [`Stats`] literal.
    Stats,
    /// A single stat name.
    StatName,
    /// A filter over units on the map.
    MapUnitFilter,
    /// A filter over unit types.
    BaseUnitFilter,
    /// A unit name.
    UnitName,
    /// A unit class name.
    UnitTypeName,
    /// A building name.
    BuildingName,
    /// A filter over buildings.
    BuildingFilter,
    /// A filter over cities.
    CityFilter,
    /// A filter over tiles.
    TerrainFilter,
    /// A resource name.
    ResourceName,
    /// A technology name.
    TechName,
    /// A promotion name.
    PromotionName,
    /// A tile improvement name.
    ImprovementName,
    /// An era name.
    EraName,
    /// A policy name.
    PolicyName,
    /// Free text for humans.
    Comment,
    /// A token the registry does not know; accepts anything.
    Unknown,
}

static TOKEN_REGISTRY: LazyLock<HashMap<&'static str, ArgumentKind>> = LazyLock::new(|| {
    ArgumentKind::ALL
        .iter()
        .filter_map(|kind| kind.token_name().map(|token| (token, *kind)))
        .collect()
});

impl ArgumentKind {
    /// All argument kinds.
    pub const ALL: &'static [ArgumentKind] = &[
        ArgumentKind::Number,
        ArgumentKind::PositiveNumber,
        ArgumentKind::RelativeNumber,
        ArgumentKind::Fraction,
        ArgumentKind::Stats,
        ArgumentKind::StatName,
        ArgumentKind::MapUnitFilter,
        ArgumentKind::BaseUnitFilter,
        ArgumentKind::UnitName,
        ArgumentKind::UnitTypeName,
        ArgumentKind::BuildingName,
        ArgumentKind::BuildingFilter,
        ArgumentKind::CityFilter,
        ArgumentKind::TerrainFilter,
        ArgumentKind::ResourceName,
        ArgumentKind::TechName,
        ArgumentKind::PromotionName,
        ArgumentKind::ImprovementName,
        ArgumentKind::EraName,
        ArgumentKind::PolicyName,
        ArgumentKind::Comment,
        ArgumentKind::Unknown,
    ];

    /// Resolves a placeholder token name to its kind.
    #[must_use]
    pub fn from_token(token: &str) -> ArgumentKind {
        TOKEN_REGISTRY
            .get(token)
            .copied()
            .unwrap_or(ArgumentKind::Unknown)
    }

    /// The token name templates use for this kind, if any.
    #[must_use]
    pub const fn token_name(self) -> Option<&'static str> {
        let token = match self {
            ArgumentKind::Number => "amount",
            ArgumentKind::PositiveNumber => "positiveAmount",
            ArgumentKind::RelativeNumber => "relativeAmount",
            ArgumentKind::Fraction => "fraction",
            ArgumentKind::Stats => "stats",
            ArgumentKind::StatName => "stat",
            ArgumentKind::MapUnitFilter => "mapUnitFilter",
            ArgumentKind::BaseUnitFilter => "baseUnitFilter",
            ArgumentKind::UnitName => "unit",
            ArgumentKind::UnitTypeName => "unitType",
            ArgumentKind::BuildingName => "building",
            ArgumentKind::BuildingFilter => "buildingFilter",
            ArgumentKind::CityFilter => "cityFilter",
            ArgumentKind::TerrainFilter => "terrainFilter",
            ArgumentKind::ResourceName => "resource",
            ArgumentKind::TechName => "tech",
            ArgumentKind::PromotionName => "promotion",
            ArgumentKind::ImprovementName => "improvement",
            ArgumentKind::EraName => "era",
            ArgumentKind::PolicyName => "policy",
            ArgumentKind::Comment => "comment",
            ArgumentKind::Unknown => return None,
        };
        Some(token)
    }

    /// Checks `argument` against this kind.
    ///
    /// Returns `None` when the argument is acceptable, otherwise the
    /// severity of the problem.
    #[must_use]
    pub fn validate<R: Ruleset + ?Sized>(self, argument: &str, ruleset: &R) -> Option<Severity> {
        let ok = match self {
            ArgumentKind::Number | ArgumentKind::RelativeNumber => {
                argument.parse::<i64>().is_ok()
            }
            ArgumentKind::PositiveNumber => argument.parse::<i64>().is_ok_and(|n| n > 0),
            ArgumentKind::Fraction => argument
                .parse::<f64>()
                .is_ok_and(|f| f.is_finite() && (0.0..=1.0).contains(&f)),
            ArgumentKind::Stats => Stats::is_stats(argument),
            ArgumentKind::StatName => argument.parse::<Stat>().is_ok(),
            ArgumentKind::MapUnitFilter => filter_accepts(argument, |part| {
                MAP_UNIT_FILTER_KEYWORDS.contains(&part)
                    || is_base_unit_filter(part, ruleset)
                    || ruleset.exists(NameCategory::Promotion, part)
            }),
            ArgumentKind::BaseUnitFilter => {
                filter_accepts(argument, |part| is_base_unit_filter(part, ruleset))
            }
            ArgumentKind::BuildingFilter => filter_accepts(argument, |part| {
                BUILDING_FILTER_KEYWORDS.contains(&part)
                    || ruleset.exists(NameCategory::Building, part)
            }),
            ArgumentKind::CityFilter => filter_accepts(argument, |part| {
                CITY_FILTER_KEYWORDS.contains(&part) || ruleset.exists(NameCategory::Nation, part)
            }),
            ArgumentKind::TerrainFilter => filter_accepts(argument, |part| {
                TERRAIN_FILTER_KEYWORDS.contains(&part)
                    || ruleset.exists_in_any(&[NameCategory::Terrain, NameCategory::Resource], part)
            }),
            ArgumentKind::UnitName
            | ArgumentKind::UnitTypeName
            | ArgumentKind::BuildingName
            | ArgumentKind::ResourceName
            | ArgumentKind::TechName
            | ArgumentKind::PromotionName
            | ArgumentKind::ImprovementName
            | ArgumentKind::EraName
            | ArgumentKind::PolicyName => self
                .name_category()
                .is_some_and(|category| ruleset.exists(category, argument)),
            ArgumentKind::Comment => !argument.trim().is_empty(),
            ArgumentKind::Unknown => true,
        };

        if ok { None } else { Some(self.failure_severity()) }
    }

    /// The ruleset category a plain name argument must exist in.
    #[must_use]
    pub const fn name_category(self) -> Option<NameCategory> {
        match self {
            ArgumentKind::UnitName => Some(NameCategory::Unit),
            ArgumentKind::UnitTypeName => Some(NameCategory::UnitType),
            ArgumentKind::BuildingName => Some(NameCategory::Building),
            ArgumentKind::ResourceName => Some(NameCategory::Resource),
            ArgumentKind::TechName => Some(NameCategory::Technology),
            ArgumentKind::PromotionName => Some(NameCategory::Promotion),
            ArgumentKind::ImprovementName => Some(NameCategory::Improvement),
            ArgumentKind::EraName => Some(NameCategory::Era),
            ArgumentKind::PolicyName => Some(NameCategory::Policy),
            _ => None,
        }
    }

    /// Severity reported when an argument fails this kind.
    #[must_use]
    pub const fn failure_severity(self) -> Severity {
        match self {
            ArgumentKind::Number
            | ArgumentKind::PositiveNumber
            | ArgumentKind::RelativeNumber
            | ArgumentKind::Fraction
            | ArgumentKind::Stats
            | ArgumentKind::StatName => Severity::RulesetInvariant,
            ArgumentKind::CityFilter | ArgumentKind::Comment | ArgumentKind::Unknown => {
                Severity::WarningOnly
            }
            _ => Severity::RulesetSpecific,
        }
    }

    /// Human-readable description for error messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ArgumentKind::Number => "number",
            ArgumentKind::PositiveNumber => "positive number",
            ArgumentKind::RelativeNumber => "relative number",
            ArgumentKind::Fraction => "fraction",
            ArgumentKind::Stats => "stats",
            ArgumentKind::StatName => "stat",
            ArgumentKind::MapUnitFilter => "map unit filter",
            ArgumentKind::BaseUnitFilter => "unit filter",
            ArgumentKind::UnitName => "unit",
            ArgumentKind::UnitTypeName => "unit type",
            ArgumentKind::BuildingName => "building",
            ArgumentKind::BuildingFilter => "building filter",
            ArgumentKind::CityFilter => "city filter",
            ArgumentKind::TerrainFilter => "terrain filter",
            ArgumentKind::ResourceName => "resource",
            ArgumentKind::TechName => "technology",
            ArgumentKind::PromotionName => "promotion",
            ArgumentKind::ImprovementName => "improvement",
            ArgumentKind::EraName => "era",
            ArgumentKind::PolicyName => "policy",
            ArgumentKind::Comment => "comment",
            ArgumentKind::Unknown => "unknown",
        }
    }
}

fn is_base_unit_filter<R: Ruleset + ?Sized>(part: &str, ruleset: &R) -> bool {
    BASE_UNIT_FILTER_KEYWORDS.contains(&part)
        || ruleset.exists_in_any(&[NameCategory::Unit, NameCategory::UnitType], part)
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
