//! Indexing uniques by structural key.
//!
//! [`UniqueMap`] buckets uniques by their structural key so that "every
//! unique of kind X on this object" is one hash lookup. Buckets keep
//! insertion order; the order of buckets relative to each other is
//! unspecified.
//!
//! The map is built on persistent collections, so cloning it (e.g. a city
//! starting from its civilization's uniques) is O(1).

use std::sync::Arc;

use im::{HashMap, Vector};
use uniques_catalog::{Template, UniqueType};
use uniques_foundation::Ruleset;

use crate::unique::Unique;

/// Uniques grouped by structural key.
#[derive(Clone, Debug, Default)]
pub struct UniqueMap {
    buckets: HashMap<String, Vector<Arc<Unique>>>,
    len: usize,
}

impl UniqueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a unique to the bucket for its key.
    pub fn insert(&mut self, unique: impl Into<Arc<Unique>>) {
        let unique = unique.into();
        match self.buckets.get_mut(unique.structural_key()) {
            Some(bucket) => bucket.push_back(unique),
            None => {
                self.buckets
                    .insert(unique.structural_key().to_string(), Vector::unit(unique));
            }
        }
        self.len += 1;
    }

    /// Parses `text` and inserts the result.
    pub fn insert_text(&mut self, text: &str) {
        self.insert(Unique::new(text));
    }

    /// Uniques under a literal structural key, in insertion order.
    pub fn query<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Arc<Unique>> + use<'a> {
        self.buckets
            .get(key)
            .into_iter()
            .flat_map(|bucket| bucket.iter())
    }

    /// Uniques under `template`'s structural key, in insertion order.
    pub fn query_template<'a>(
        &'a self,
        template: &Template,
    ) -> impl Iterator<Item = &'a Arc<Unique>> + use<'a> {
        self.query(template.structural_key())
    }

    /// Uniques of the catalog entry `unique_type`, in insertion order.
    pub fn query_type(&self, unique_type: UniqueType) -> impl Iterator<Item = &Arc<Unique>> {
        self.query_template(unique_type.template())
    }

    /// Uniques of `unique_type` whose arguments are valid under `ruleset`.
    pub fn matching<'a, R: Ruleset + ?Sized>(
        &'a self,
        unique_type: UniqueType,
        ruleset: &'a R,
    ) -> impl Iterator<Item = &'a Arc<Unique>> {
        let template = unique_type.template();
        self.query_template(template)
            .filter(move |unique| unique.matches(template, ruleset))
    }

    /// Returns true if any unique of `unique_type` is present.
    #[must_use]
    pub fn contains_type(&self, unique_type: UniqueType) -> bool {
        self.query_type(unique_type).next().is_some()
    }

    /// Every unique, bucket by bucket.
    pub fn all(&self) -> impl Iterator<Item = &Arc<Unique>> {
        self.buckets.values().flat_map(|bucket| bucket.iter())
    }

    /// Number of distinct structural keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of uniques.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no uniques.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<U: Into<Arc<Unique>>> Extend<U> for UniqueMap {
    fn extend<I: IntoIterator<Item = U>>(&mut self, iter: I) {
        for unique in iter {
            self.insert(unique);
        }
    }
}

impl<U: Into<Arc<Unique>>> FromIterator<U> for UniqueMap {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        let mut map = UniqueMap::new();
        map.extend(iter);
        map
    }
}
