//! Unique instances.
//!
//! A [`Unique`] is one concrete effect string found in content, e.g.
//! `[25]% maintenance costs for [Melee] units <when at war>`. Construction
//! splits off conditionals, extracts the bracketed arguments, and resolves
//! the catalog entry by structural key. Nothing else is computed eagerly.

use std::fmt;

use once_cell::race::OnceBox;
use tracing::warn;
use uniques_catalog::{Catalog, Template, UniqueType};
use uniques_foundation::{Ruleset, Stats, extract_tokens, split_conditionals, structural_key};

use crate::compliance::{self, ComplianceError};

/// One concrete unique.
pub struct Unique {
    text: String,
    structural_key: String,
    params: Vec<String>,
    unique_type: Option<UniqueType>,
    conditionals: Vec<Unique>,
    /// Published at most once; racing initializers compute the same value.
    stats: OnceBox<Stats>,
}

impl Unique {
    /// Parses a unique from its text.
    ///
    /// Text that matches no template is still a valid unique, with no type.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();

        let (key, params, conditionals) = {
            let (main, conditionals) = split_conditionals(&text);
            let params = extract_tokens(&main)
                .into_iter()
                .map(str::to_owned)
                .collect::<Vec<_>>();
            let conditionals = conditionals.into_iter().map(Unique::new).collect::<Vec<_>>();
            (structural_key(&main), params, conditionals)
        };

        let unique_type = Catalog::global()
            .lookup_by_key(&key)
            .map(Template::unique_type);

        Self {
            text,
            structural_key: key,
            params,
            unique_type,
            conditionals,
            stats: OnceBox::new(),
        }
    }

    /// The full text, conditionals included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The main text with every placeholder erased.
    #[must_use]
    pub fn structural_key(&self) -> &str {
        &self.structural_key
    }

    /// Literal arguments of the main text, in order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The matched catalog entry, if any.
    #[must_use]
    pub fn unique_type(&self) -> Option<UniqueType> {
        self.unique_type
    }

    /// The matched catalog record, if any.
    #[must_use]
    pub fn template(&self) -> Option<&'static Template> {
        self.unique_type.map(UniqueType::template)
    }

    /// Conditionals written in `<...>` after the main text.
    #[must_use]
    pub fn conditionals(&self) -> &[Unique] {
        &self.conditionals
    }

    /// Returns true if this unique matched `template`'s entry.
    #[must_use]
    pub fn is_of_kind(&self, template: &Template) -> bool {
        self.unique_type == Some(template.unique_type())
    }

    /// Returns true if this unique matched the entry `unique_type`.
    #[must_use]
    pub fn is_of_type(&self, unique_type: UniqueType) -> bool {
        self.unique_type == Some(unique_type)
    }

    /// Returns true if this unique is of `template`'s kind and all of its
    /// arguments are valid under `ruleset`.
    pub fn matches<R: Ruleset + ?Sized>(&self, template: &Template, ruleset: &R) -> bool {
        self.is_of_kind(template) && self.compliance_errors(template, ruleset).is_empty()
    }

    /// Checks this unique's arguments against `template`'s slots.
    ///
    /// Recomputed on every call: the answer depends on `ruleset`.
    pub fn compliance_errors<R: Ruleset + ?Sized>(
        &self,
        template: &Template,
        ruleset: &R,
    ) -> Vec<ComplianceError> {
        compliance::compliance_errors(&self.params, template, ruleset)
    }

    /// The yield carried by the first argument that is a valid Stats literal.
    ///
    /// Computed on first access. Stats-looking arguments that fail to parse
    /// are skipped with a warning; with no valid literal the stats are empty.
    pub fn stats(&self) -> &Stats {
        self.stats.get_or_init(|| Box::new(self.parse_stats()))
    }

    fn parse_stats(&self) -> Stats {
        self.params
            .iter()
            .filter(|param| looks_like_stats(param))
            .find_map(|param| match Stats::parse(param) {
                Ok(stats) => Some(stats),
                Err(err) => {
                    warn!(unique = %self.text, %err, "malformed stats argument, skipping");
                    None
                }
            })
            .unwrap_or_default()
    }
}

/// A signed amount followed by a word, e.g. `+1 Gold`; plain `+10` is not.
fn looks_like_stats(param: &str) -> bool {
    param.starts_with(['+', '-']) && param.contains(' ')
}

impl Clone for Unique {
    fn clone(&self) -> Self {
        let stats = OnceBox::new();
        if let Some(computed) = self.stats.get() {
            let _ = stats.set(Box::new(*computed));
        }
        Self {
            text: self.text.clone(),
            structural_key: self.structural_key.clone(),
            params: self.params.clone(),
            unique_type: self.unique_type,
            conditionals: self.conditionals.clone(),
            stats,
        }
    }
}

impl fmt::Debug for Unique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unique")
            .field("text", &self.text)
            .field("unique_type", &self.unique_type)
            .field("params", &self.params)
            .field("conditionals", &self.conditionals)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Unique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Unique {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Unique {}

impl From<&str> for Unique {
    fn from(text: &str) -> Self {
        Unique::new(text)
    }
}

impl From<String> for Unique {
    fn from(text: String) -> Self {
        Unique::new(text)
    }
}
