//! Core text utilities and shared types for uniques.
//!
//! This crate provides:
//! - [`placeholder`] - Bracketed token extraction and structural keys
//! - [`Severity`] - Three-level problem severity
//! - [`Stats`] - Compound yield literals such as `+1 Gold, +2 Food`
//! - [`Ruleset`] - The "does this name exist?" capability, with [`RulesetNames`]
//! - [`Error`] - Errors for the fallible helper APIs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod placeholder;
pub mod ruleset;
pub mod severity;
pub mod stats;

pub use error::{Error, ErrorKind, Result};
pub use placeholder::{
    PLACEHOLDER_MARKER, extract_tokens, fill_placeholders, has_placeholders, split_conditionals,
    structural_key,
};
pub use ruleset::{NameCategory, Ruleset, RulesetNames};
pub use severity::Severity;
pub use stats::{Stat, Stats};
