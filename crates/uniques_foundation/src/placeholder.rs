//! Placeholder extraction.
//!
//! Uniques are written with bracketed tokens. A template names its slots
//! (`[amount]% Strength`), an instance fills them with literals
//! (`[25]% Strength`). Erasing every token to [`PLACEHOLDER_MARKER`] yields the
//! structural key both sides share.
//!
//! Brackets do not nest. An opening bracket with no closing bracket after it
//! is plain text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// The marker every bracketed token collapses to in a structural key.
pub const PLACEHOLDER_MARKER: &str = "[]";

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("token regex is valid"));

/// Bracketed tokens are matched first so that `<` and `>` inside an argument
/// never open or close a conditional.
static CONDITIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]|<([^>]*)>").expect("conditional regex is valid")
});

/// Returns the inner text of every bracketed token, left to right.
#[must_use]
pub fn extract_tokens(text: &str) -> Vec<&str> {
    TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Returns `text` with every bracketed token replaced by [`PLACEHOLDER_MARKER`].
#[must_use]
pub fn structural_key(text: &str) -> String {
    TOKEN_REGEX.replace_all(text, PLACEHOLDER_MARKER).into_owned()
}

/// Returns true if `text` contains at least one bracketed token.
#[must_use]
pub fn has_placeholders(text: &str) -> bool {
    TOKEN_REGEX.is_match(text)
}

/// Splits `<...>` conditionals off the main text.
///
/// Angle brackets inside a bracketed token belong to the argument, not to a
/// conditional. The main text is returned trimmed with every conditional
/// removed; the conditionals' inner texts follow in order.
#[must_use]
pub fn split_conditionals(text: &str) -> (Cow<'_, str>, Vec<&str>) {
    if !text.contains('<') {
        return (Cow::Borrowed(text.trim()), Vec::new());
    }

    let conditionals = CONDITIONAL_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .collect::<Vec<_>>();
    if conditionals.is_empty() {
        return (Cow::Borrowed(text.trim()), conditionals);
    }

    let main = CONDITIONAL_REGEX.replace_all(text, |cap: &Captures<'_>| {
        if cap.get(1).is_some() {
            String::new()
        } else {
            cap[0].to_string()
        }
    });

    (Cow::Owned(main.trim().to_string()), conditionals)
}

/// Fills a template's tokens with `values`, in order.
///
/// Tokens beyond the end of `values` are left as they are.
#[must_use]
pub fn fill_placeholders<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    let mut next = 0;
    TOKEN_REGEX
        .replace_all(template, |cap: &Captures<'_>| {
            let filled = match values.get(next) {
                Some(value) => format!("[{}]", value.as_ref()),
                None => cap[0].to_string(),
            };
            next += 1;
            filled
        })
        .into_owned()
}
