//! Filling a template's slots yields a text that resolves back to it.

use proptest::prelude::*;
use uniques_catalog::{Catalog, UniqueType};
use uniques_engine::Unique;
use uniques_foundation::fill_placeholders;

fn literal() -> impl Strategy<Value = String> {
    "[A-Za-z0-9+%.,<> -]{0,12}"
}

fn any_type() -> impl Strategy<Value = UniqueType> {
    prop::sample::select(UniqueType::ALL.to_vec())
}

proptest! {
    #[test]
    fn filled_template_resolves_to_its_entry(
        unique_type in any_type(),
        literals in prop::collection::vec(literal(), 4),
    ) {
        let template = unique_type.template();
        let arguments = &literals[..template.arity()];
        let text = fill_placeholders(template.text(), arguments);

        let unique = Unique::new(text.as_str());
        prop_assert_eq!(unique.unique_type(), Some(unique_type));
        prop_assert_eq!(unique.params(), arguments);
        prop_assert!(unique.conditionals().is_empty());
    }
}

#[test]
fn deprecated_entries_still_resolve() {
    for template in Catalog::global().iter().filter(|t| t.is_deprecated()) {
        let arguments = vec!["1"; template.arity()];
        let unique = Unique::new(fill_placeholders(template.text(), &arguments));
        assert_eq!(unique.unique_type(), Some(template.unique_type()));
    }
}
