//! Integration tests for Layer 2: Engine
//!
//! Tests for parsing instances, compliance, indexing, caching, and batch
//! validation.

mod validation;
