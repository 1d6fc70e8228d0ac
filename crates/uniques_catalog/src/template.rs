//! Catalog records and lookups.
//!
//! The catalog is built once, on first use, from [`UniqueType::ALL`]. After
//! that it is read-only and shared by every thread.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;
use uniques_foundation::{extract_tokens, fill_placeholders, structural_key};

use crate::param::ArgumentKind;
use crate::unique_type::{UniqueTarget, UniqueType};

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// One catalog entry with its derived matching data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    unique_type: UniqueType,
    structural_key: String,
    argument_kinds: Vec<Vec<ArgumentKind>>,
}

impl Template {
    fn new(unique_type: UniqueType) -> Self {
        let text = unique_type.text();
        let argument_kinds = match unique_type.kind_overrides() {
            Some(overrides) => overrides.iter().map(|kinds| kinds.to_vec()).collect(),
            None => extract_tokens(text)
                .into_iter()
                .map(|token| vec![ArgumentKind::from_token(token)])
                .collect(),
        };

        Self {
            unique_type,
            structural_key: structural_key(text),
            argument_kinds,
        }
    }

    /// The entry's identifier.
    #[must_use]
    pub fn unique_type(&self) -> UniqueType {
        self.unique_type
    }

    /// The authored text, with named placeholders.
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.unique_type.text()
    }

    /// The text with every placeholder erased.
    #[must_use]
    pub fn structural_key(&self) -> &str {
        &self.structural_key
    }

    /// Acceptable kinds for each slot, in slot order.
    #[must_use]
    pub fn argument_kinds(&self) -> &[Vec<ArgumentKind>] {
        &self.argument_kinds
    }

    /// Number of placeholder slots.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.argument_kinds.len()
    }

    /// Content this unique may appear on.
    #[must_use]
    pub fn targets(&self) -> &'static [UniqueTarget] {
        self.unique_type.targets()
    }

    /// The replacing entry, if this one is deprecated.
    #[must_use]
    pub fn superseded_by(&self) -> Option<&'static Template> {
        self.unique_type.superseded_by().map(UniqueType::template)
    }

    /// Returns true if this entry has a replacement.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.unique_type.is_deprecated()
    }

    /// Renders the replacing entry's text filled with `arguments`.
    ///
    /// Returns `None` if this entry is not deprecated, or if the replacement
    /// has a different number of slots.
    #[must_use]
    pub fn deprecation_replacement<S: AsRef<str>>(&self, arguments: &[S]) -> Option<String> {
        let replacement = self.superseded_by()?;
        if replacement.arity() != arguments.len() {
            return None;
        }
        Some(fill_placeholders(replacement.text(), arguments))
    }
}

/// The process-wide set of templates.
#[derive(Debug)]
pub struct Catalog {
    templates: Vec<Template>,
    by_key: HashMap<String, UniqueType>,
    by_name: HashMap<&'static str, UniqueType>,
}

impl Catalog {
    fn build() -> Self {
        let templates: Vec<Template> =
            UniqueType::ALL.iter().map(|ty| Template::new(*ty)).collect();

        let mut by_key = HashMap::with_capacity(templates.len());
        for template in &templates {
            by_key
                .entry(template.structural_key.clone())
                .or_insert(template.unique_type);
        }

        let by_name = UniqueType::ALL.iter().map(|ty| (ty.name(), *ty)).collect();

        debug!(
            templates = templates.len(),
            keys = by_key.len(),
            "unique catalog initialized"
        );

        Self {
            templates,
            by_key,
            by_name,
        }
    }

    /// Returns the shared catalog, building it on first use.
    #[must_use]
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// Returns the record for an entry.
    #[must_use]
    pub fn get(&self, unique_type: UniqueType) -> &Template {
        &self.templates[unique_type as usize]
    }

    /// Finds the template whose structural key is `key`.
    #[must_use]
    pub fn lookup_by_key(&self, key: &str) -> Option<&Template> {
        self.by_key.get(key).map(|ty| self.get(*ty))
    }

    /// Finds a template by its stable entry name, e.g. `"Strength"`.
    #[must_use]
    pub fn lookup_by_kind_name(&self, name: &str) -> Option<&Template> {
        self.by_name.get(name).map(|ty| self.get(*ty))
    }

    /// Iterates over every template in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
