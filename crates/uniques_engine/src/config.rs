//! Configuration for validation and caching.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls which problems [`crate::UniqueValidator`] reports.
///
/// A mod that is loaded on top of a base ruleset cannot be checked for
/// references into that ruleset, so only ruleset-invariant problems are
/// meaningful for it. A complete base ruleset can be checked fully.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// Report arguments naming objects absent from the ruleset.
    pub report_ruleset_specific: bool,

    /// Report advisory problems (unknown uniques, deprecations, free text).
    pub report_warnings: bool,

    /// Also check the `<...>` conditionals of each unique.
    pub check_conditionals: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::base_ruleset()
    }
}

impl ValidationConfig {
    /// Full checking, for a complete base ruleset.
    #[must_use]
    pub fn base_ruleset() -> Self {
        Self {
            report_ruleset_specific: true,
            report_warnings: true,
            check_conditionals: true,
        }
    }

    /// Ruleset-invariant checking only, for a mod checked on its own.
    #[must_use]
    pub fn mod_only() -> Self {
        Self {
            report_ruleset_specific: false,
            ..Self::base_ruleset()
        }
    }

    /// Builder method to set ruleset-specific reporting.
    #[must_use]
    pub fn with_ruleset_specific(mut self, report: bool) -> Self {
        self.report_ruleset_specific = report;
        self
    }

    /// Builder method to set warning reporting.
    #[must_use]
    pub fn with_warnings(mut self, report: bool) -> Self {
        self.report_warnings = report;
        self
    }

    /// Builder method to set conditional checking.
    #[must_use]
    pub fn with_conditionals(mut self, check: bool) -> Self {
        self.check_conditionals = check;
        self
    }
}

/// Bounds for [`crate::UniqueCache`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CacheConfig {
    /// Maximum number of distinct texts kept; `None` is unbounded.
    pub max_entries: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: Some(10_000),
        }
    }
}

impl CacheConfig {
    /// An unbounded cache.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_entries: None }
    }

    /// Builder method to set the entry bound.
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }
}
