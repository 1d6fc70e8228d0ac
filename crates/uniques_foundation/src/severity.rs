//! Severity of an argument or unique problem.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How bad a validation problem is.
///
/// Variants are declared most severe first, so the derived ordering makes
/// `RulesetInvariant < RulesetSpecific < WarningOnly`. "Least severe" of a
/// set of problems is therefore its maximum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Structurally wrong regardless of ruleset (e.g. not a number).
    RulesetInvariant,
    /// Well-formed, but names something absent from this ruleset.
    RulesetSpecific,
    /// Free text that cannot be verified; advisory only.
    WarningOnly,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 3] = [
        Severity::RulesetInvariant,
        Severity::RulesetSpecific,
        Severity::WarningOnly,
    ];

    /// Returns true for anything that should block content, i.e. not a warning.
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Severity::WarningOnly)
    }

    /// Returns the less severe of two severities.
    #[must_use]
    pub fn least_severe(self, other: Severity) -> Severity {
        self.max(other)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::RulesetInvariant => "ruleset-invariant",
            Severity::RulesetSpecific => "ruleset-specific",
            Severity::WarningOnly => "warning",
        };
        write!(f, "{s}")
    }
}
