//! Filter vocabulary.
//!
//! Filter arguments name either a fixed keyword understood by the game
//! ("Melee", "Wonders", "in all cities") or an object from the ruleset.
//! A filter may also be a conjunction written as `{A} {B}`, which is valid
//! only when every part is.

/// Keywords accepted wherever a unit type is filtered.
pub const BASE_UNIT_FILTER_KEYWORDS: &[&str] = &[
    "All",
    "all",
    "Melee",
    "Ranged",
    "Civilian",
    "Military",
    "Land",
    "Water",
    "Air",
    "non-air",
    "Nuclear Weapon",
    "Great Person",
    "Religious",
];

/// Extra keywords that only make sense for units on the map.
pub const MAP_UNIT_FILTER_KEYWORDS: &[&str] = &[
    "Wounded",
    "Embarked",
    "City",
    "Barbarian",
    "Barbarians",
];

/// Keywords accepted wherever buildings are filtered.
pub const BUILDING_FILTER_KEYWORDS: &[&str] = &[
    "All",
    "Building",
    "Buildings",
    "Wonder",
    "Wonders",
    "National Wonder",
    "World Wonder",
];

/// Keywords accepted wherever cities are filtered.
pub const CITY_FILTER_KEYWORDS: &[&str] = &[
    "in this city",
    "in all cities",
    "in your cities",
    "in all coastal cities",
    "in capital",
    "in all non-occupied cities",
    "in all cities with a world wonder",
    "in all cities connected to capital",
    "in all cities with a garrison",
    "in puppeted cities",
    "in annexed cities",
    "in holy cities",
    "in City-State cities",
    "in cities following this religion",
    "in other cities",
];

/// Keywords accepted wherever tiles are filtered.
pub const TERRAIN_FILTER_KEYWORDS: &[&str] = &[
    "All",
    "Land",
    "Water",
    "Coastal",
    "River",
    "Open terrain",
    "Rough terrain",
    "Foreign Land",
    "Friendly Land",
    "Enemy Land",
    "Natural Wonder",
    "Impassable",
    "Fresh water",
    "Featureless",
    "resource",
    "Strategic resource",
    "Luxury resource",
    "Bonus resource",
    "Water resource",
];

/// Splits a `{A} {B}` conjunction into its parts.
///
/// Returns `None` when `filter` is not written as a conjunction.
#[must_use]
pub fn conjunction_parts(filter: &str) -> Option<Vec<&str>> {
    let inner = filter.strip_prefix('{')?.strip_suffix('}')?;
    Some(inner.split("} {").collect())
}

/// Returns true if `filter` is accepted by `accepts`, either as a whole or,
/// for a conjunction, part by part.
#[must_use]
pub fn filter_accepts(filter: &str, accepts: impl Fn(&str) -> bool) -> bool {
    match conjunction_parts(filter) {
        Some(parts) => parts.iter().all(|part| !part.is_empty() && accepts(part)),
        None => !filter.is_empty() && accepts(filter),
    }
}
