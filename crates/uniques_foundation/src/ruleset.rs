//! The ruleset capability.
//!
//! Argument validation only needs to ask "does name X exist in category C?".
//! [`Ruleset`] is that question; [`RulesetNames`] is a plain in-memory answer.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A category of named game objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NameCategory {
    /// Unit types such as `Warrior`.
    Unit,
    /// Unit classes such as `Melee` or `Mounted`.
    UnitType,
    /// Buildings.
    Building,
    /// Resources.
    Resource,
    /// Technologies.
    Technology,
    /// Promotions.
    Promotion,
    /// Terrains and terrain features.
    Terrain,
    /// Tile improvements.
    Improvement,
    /// Eras.
    Era,
    /// Social policies.
    Policy,
    /// Nations and city-states.
    Nation,
}

impl NameCategory {
    /// All categories.
    pub const ALL: [NameCategory; 11] = [
        NameCategory::Unit,
        NameCategory::UnitType,
        NameCategory::Building,
        NameCategory::Resource,
        NameCategory::Technology,
        NameCategory::Promotion,
        NameCategory::Terrain,
        NameCategory::Improvement,
        NameCategory::Era,
        NameCategory::Policy,
        NameCategory::Nation,
    ];

    /// Returns the category's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NameCategory::Unit => "Unit",
            NameCategory::UnitType => "UnitType",
            NameCategory::Building => "Building",
            NameCategory::Resource => "Resource",
            NameCategory::Technology => "Technology",
            NameCategory::Promotion => "Promotion",
            NameCategory::Terrain => "Terrain",
            NameCategory::Improvement => "Improvement",
            NameCategory::Era => "Era",
            NameCategory::Policy => "Policy",
            NameCategory::Nation => "Nation",
        }
    }
}

impl FromStr for NameCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NameCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::unknown_category(s))
    }
}

impl fmt::Display for NameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup capability over the active ruleset.
///
/// Implementations must be cheap to query; validation asks once per
/// argument per check and never caches the answer.
pub trait Ruleset {
    /// Returns true if `name` exists in `category`.
    fn exists(&self, category: NameCategory, name: &str) -> bool;

    /// Returns true if `name` exists in any of `categories`.
    fn exists_in_any(&self, categories: &[NameCategory], name: &str) -> bool {
        categories.iter().any(|c| self.exists(*c, name))
    }
}

impl<R: Ruleset + ?Sized> Ruleset for &R {
    fn exists(&self, category: NameCategory, name: &str) -> bool {
        (**self).exists(category, name)
    }
}

/// In-memory set of names per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesetNames {
    names: HashMap<NameCategory, HashSet<String>>,
}

impl RulesetNames {
    /// Creates an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add names to a category.
    #[must_use]
    pub fn with<I, S>(mut self, category: NameCategory, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(category, names);
        self
    }

    /// Adds one name. Returns true if it was new.
    pub fn insert(&mut self, category: NameCategory, name: impl Into<String>) -> bool {
        self.names.entry(category).or_default().insert(name.into())
    }

    /// Adds names to a category.
    pub fn extend<I, S>(&mut self, category: NameCategory, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names
            .entry(category)
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    /// Iterates over the names of one category, in no particular order.
    pub fn names(&self, category: NameCategory) -> impl Iterator<Item = &str> {
        self.names
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Returns the total number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.values().map(HashSet::len).sum()
    }

    /// Returns true if no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Ruleset for RulesetNames {
    fn exists(&self, category: NameCategory, name: &str) -> bool {
        self.names
            .get(&category)
            .is_some_and(|set| set.contains(name))
    }
}
