//! Unique instances, compliance checking, and indexing.
//!
//! # Architecture
//!
//! ```text
//! "[25]% maintenance costs for [Melee] units <when at war>"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ UNIQUE          │  → key "[]% maintenance costs for [] units",
//! │                 │    params ["25", "Melee"], conditionals ["when at war"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CATALOG LOOKUP  │  → UnitMaintenanceDiscount
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMPLIANCE      │  → [] (per ruleset, on demand)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`unique`] - The [`Unique`] instance type
//! - [`compliance`] - Per-argument checks producing [`ComplianceError`]s
//! - [`map`] - [`UniqueMap`], uniques indexed by structural key
//! - [`cache`] - [`UniqueCache`], memoized parsing by text
//! - [`validator`] - [`UniqueValidator`] batch reports
//! - [`config`] - Validation and cache configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod compliance;
pub mod config;
pub mod map;
pub mod unique;
pub mod validator;

pub use cache::UniqueCache;
pub use compliance::ComplianceError;
pub use config::{CacheConfig, ValidationConfig};
pub use map::UniqueMap;
pub use unique::Unique;
pub use validator::{IssueKind, UniqueValidator, ValidationIssue, ValidationReport};
