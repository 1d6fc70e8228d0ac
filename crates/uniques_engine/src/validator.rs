//! Batch validation of uniques against a ruleset.
//!
//! The validator walks uniques (and their conditionals), collects every
//! problem as a [`ValidationIssue`], and filters by [`ValidationConfig`].
//! It classifies; callers decide whether to reject content, show warnings,
//! or ignore.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::{debug, trace};
use uniques_catalog::UniqueType;
use uniques_foundation::{Ruleset, Severity};

use crate::compliance::ComplianceError;
use crate::config::ValidationConfig;
use crate::map::UniqueMap;
use crate::unique::Unique;

/// What is wrong with a unique.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IssueKind {
    /// The text matches no catalog entry.
    #[error("not a recognized unique")]
    Unknown,

    /// The entry is deprecated.
    #[error("deprecated, use {superseded_by} instead{}", replacement_hint(.replacement.as_deref()))]
    Deprecated {
        /// The replacing entry.
        superseded_by: UniqueType,
        /// The unique rewritten in the replacing form, when it can be.
        replacement: Option<String>,
    },

    /// A conditional-only entry written as a unique of its own.
    #[error("{0} can only be used as a conditional")]
    ConditionalAsUnique(UniqueType),

    /// A regular entry written inside `<...>`.
    #[error("{0} cannot be used as a conditional")]
    NotAConditional(UniqueType),

    /// An argument failed validation.
    #[error(transparent)]
    Argument(ComplianceError),
}

fn replacement_hint(replacement: Option<&str>) -> String {
    let mut hint = String::new();
    if let Some(text) = replacement {
        let _ = write!(hint, ": \"{text}\"");
    }
    hint
}

/// One problem found in one unique.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("\"{text}\": {kind}")]
pub struct ValidationIssue {
    /// The offending unique's text (the conditional's, for conditionals).
    pub text: String,
    /// What is wrong.
    pub kind: IssueKind,
    /// How bad it is.
    pub severity: Severity,
}

/// Every issue found in a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Appends another report's issues.
    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }

    /// Iterates over the issues in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    /// The most severe issue's severity, if any.
    #[must_use]
    pub fn worst_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|issue| issue.severity).min()
    }

    /// Returns true if any issue is more than a warning.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.severity.is_error())
    }

    /// Number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

/// Checks uniques against one ruleset.
pub struct UniqueValidator<'r, R: Ruleset + ?Sized> {
    ruleset: &'r R,
    config: ValidationConfig,
}

impl<'r, R: Ruleset + ?Sized> UniqueValidator<'r, R> {
    /// Creates a validator with full checking.
    #[must_use]
    pub fn new(ruleset: &'r R) -> Self {
        Self::with_config(ruleset, ValidationConfig::default())
    }

    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn with_config(ruleset: &'r R, config: ValidationConfig) -> Self {
        Self { ruleset, config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Checks one unique and, if configured, its conditionals.
    #[must_use]
    pub fn check_unique(&self, unique: &Unique) -> ValidationReport {
        let mut report = ValidationReport::new();
        self.check_one(unique, false, &mut report);

        if self.config.check_conditionals {
            for conditional in unique.conditionals() {
                self.check_one(conditional, true, &mut report);
            }
        }

        report
    }

    /// Checks every unique in a map.
    #[must_use]
    pub fn check_map(&self, map: &UniqueMap) -> ValidationReport {
        self.check_all(map.all().map(|unique| &**unique))
    }

    /// Checks every unique in a sequence.
    #[must_use]
    pub fn check_all<'u>(&self, uniques: impl IntoIterator<Item = &'u Unique>) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut checked = 0usize;
        for unique in uniques {
            report.merge(self.check_unique(unique));
            checked += 1;
        }

        debug!(
            checked,
            issues = report.len(),
            worst = ?report.worst_severity(),
            "validated uniques"
        );
        report
    }

    fn check_one(&self, unique: &Unique, as_conditional: bool, report: &mut ValidationReport) {
        let Some(template) = unique.template() else {
            self.record(report, unique, IssueKind::Unknown, Severity::WarningOnly);
            return;
        };
        let unique_type = template.unique_type();

        if unique_type.is_conditional() != as_conditional {
            let kind = if as_conditional {
                IssueKind::NotAConditional(unique_type)
            } else {
                IssueKind::ConditionalAsUnique(unique_type)
            };
            self.record(report, unique, kind, Severity::RulesetInvariant);
        }

        if let Some(superseded_by) = unique_type.superseded_by() {
            let replacement = template
                .deprecation_replacement(unique.params())
                .map(|main| with_conditionals(main, unique));
            self.record(
                report,
                unique,
                IssueKind::Deprecated {
                    superseded_by,
                    replacement,
                },
                Severity::WarningOnly,
            );
        }

        for error in unique.compliance_errors(template, self.ruleset) {
            let severity = error.severity;
            self.record(report, unique, IssueKind::Argument(error), severity);
        }
    }

    fn record(
        &self,
        report: &mut ValidationReport,
        unique: &Unique,
        kind: IssueKind,
        severity: Severity,
    ) {
        let reported = match severity {
            Severity::RulesetInvariant => true,
            Severity::RulesetSpecific => self.config.report_ruleset_specific,
            Severity::WarningOnly => self.config.report_warnings,
        };
        if !reported {
            return;
        }

        trace!(unique = %unique, %severity, issue = %kind, "unique issue");
        report.push(ValidationIssue {
            text: unique.text().to_string(),
            kind,
            severity,
        });
    }
}

fn with_conditionals(mut main: String, unique: &Unique) -> String {
    for conditional in unique.conditionals() {
        let _ = write!(main, " <{}>", conditional.text());
    }
    main
}
