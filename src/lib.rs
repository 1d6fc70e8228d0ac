//! Uniques - templated rule-effect text
//!
//! This crate re-exports all layers of the uniques system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: uniques_engine      - Instances, compliance, indexing, validation
//! Layer 1: uniques_catalog     - Template catalog and argument kinds
//! Layer 0: uniques_foundation  - Placeholders, Stats, Severity, Ruleset
//! ```

pub use uniques_catalog as catalog;
pub use uniques_engine as engine;
pub use uniques_foundation as foundation;
