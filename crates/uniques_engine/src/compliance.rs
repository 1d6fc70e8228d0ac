//! Argument compliance.
//!
//! A slot is satisfied when its argument passes ANY of the slot's acceptable
//! kinds. When every kind rejects it, one [`ComplianceError`] is recorded for
//! the slot, carrying the least severe of the per-kind failures.
//!
//! Results depend on the ruleset and are never cached.

use std::fmt::Write as _;

use thiserror::Error;
use uniques_catalog::{ArgumentKind, Template};
use uniques_foundation::{Ruleset, Severity};

/// One argument that failed every acceptable kind of its slot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("argument {position} `{argument}` is not a valid {}", describe_kinds(.accepted))]
pub struct ComplianceError {
    /// Zero-based slot index.
    pub position: usize,
    /// The literal argument text.
    pub argument: String,
    /// Every kind the slot would have accepted.
    pub accepted: Vec<ArgumentKind>,
    /// Least severe of the per-kind failures.
    pub severity: Severity,
}

fn describe_kinds(kinds: &[ArgumentKind]) -> String {
    let mut out = String::new();
    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            out.push_str(" or ");
        }
        let _ = write!(out, "{kind}");
    }
    out
}

/// Checks `arguments` against the slots of `template`.
///
/// Arguments beyond the template's slots are ignored.
pub fn compliance_errors<S, R>(
    arguments: &[S],
    template: &Template,
    ruleset: &R,
) -> Vec<ComplianceError>
where
    S: AsRef<str>,
    R: Ruleset + ?Sized,
{
    let mut errors = Vec::new();

    let slots = arguments.iter().zip(template.argument_kinds());
    for (position, (argument, kinds)) in slots.enumerate() {
        let argument = argument.as_ref();

        // Collecting into `Option` stops at the first kind that accepts.
        let Some(failures) = kinds
            .iter()
            .map(|kind| kind.validate(argument, ruleset))
            .collect::<Option<Vec<Severity>>>()
        else {
            continue;
        };

        // Least severe failure wins.
        // TODO: also keep the most severe failure once the warning panel can show both.
        let Some(severity) = failures.into_iter().max() else {
            continue;
        };

        errors.push(ComplianceError {
            position,
            argument: argument.to_string(),
            accepted: kinds.clone(),
            severity,
        });
    }

    errors
}
