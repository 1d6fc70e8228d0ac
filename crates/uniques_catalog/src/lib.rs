//! The closed catalog of unique templates.
//!
//! A template is an authored sentence with named slots:
//!
//! ```text
//! "[amount]% maintenance costs for [mapUnitFilter] units"
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ STRUCTURAL KEY   │  → "[]% maintenance costs for [] units"
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ ARGUMENT KINDS   │  → [Number], [MapUnitFilter]
//! └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`unique_type`] - The [`UniqueType`] enumeration and its declarations
//! - [`template`] - Derived [`Template`] records and the [`Catalog`] lookups
//! - [`param`] - [`ArgumentKind`] and per-kind validation
//! - [`filter`] - Keyword vocabulary for filter arguments

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod filter;
pub mod param;
pub mod template;
pub mod unique_type;

pub use param::ArgumentKind;
pub use template::{Catalog, Template};
pub use unique_type::{UniqueTarget, UniqueType};
