//! Integration tests for Layer 0: Foundation
//!
//! Tests for placeholder extraction, Stats literals, rulesets, and errors.

mod errors;
mod placeholders;
mod rulesets;
