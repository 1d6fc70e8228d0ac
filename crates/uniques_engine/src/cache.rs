//! Memoized parsing.
//!
//! The same unique texts are displayed over and over. [`UniqueCache`] parses
//! each distinct text once and hands out shared instances afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::config::CacheConfig;
use crate::unique::Unique;

/// Parsed uniques by exact text.
#[derive(Debug, Default)]
pub struct UniqueCache {
    entries: HashMap<String, Arc<Unique>>,
    config: CacheConfig,
    hits: u64,
    misses: u64,
}

impl UniqueCache {
    /// Creates a cache with the default bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache with the given configuration.
    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the parsed unique for `text`, parsing it on first request.
    ///
    /// When the cache is full it is cleared before the new entry is added.
    pub fn get_or_parse(&mut self, text: &str) -> Arc<Unique> {
        if let Some(unique) = self.entries.get(text) {
            self.hits += 1;
            trace!(text, "unique cache hit");
            return Arc::clone(unique);
        }

        self.misses += 1;
        trace!(text, "unique cache miss");

        if self
            .config
            .max_entries
            .is_some_and(|max| self.entries.len() >= max)
        {
            trace!(entries = self.entries.len(), "unique cache full, clearing");
            self.entries.clear();
        }

        let unique = Arc::new(Unique::new(text));
        self.entries.insert(text.to_string(), Arc::clone(&unique));
        unique
    }

    /// Returns the cached unique for `text` without parsing.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Arc<Unique>> {
        self.entries.get(text)
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to parse.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
