//! Dish name and dietary variation keys

use std::borrow::Cow;

const FRENCH_BEEF: &str = "boeuf";
const ENGLISH_BEEF: &str = "Beef";

/// Key used for a dish with no dietary exceptions
pub const STANDARD_VARIATION: &str = "standard";

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Canonical catalog name of a dish
///
/// A leading "Boeuf" token (any case, followed by a word boundary) becomes
/// "Beef"; the rest of the name is kept as is. "Boeuffant" is left alone.
pub fn normalize_dish_name(name: &str) -> Cow<'_, str> {
    let Some(head) = name.get(..FRENCH_BEEF.len()) else {
        return Cow::Borrowed(name);
    };
    if !head.eq_ignore_ascii_case(FRENCH_BEEF) {
        return Cow::Borrowed(name);
    }
    let rest = &name[FRENCH_BEEF.len()..];
    if rest.chars().next().is_some_and(is_word_char) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(format!("{}{}", ENGLISH_BEEF, rest))
}

/// Variation key of one dish occurrence
///
/// Exceptions are sorted so the key does not depend on their order.
pub fn variation_key(exceptions: &[String]) -> String {
    if exceptions.is_empty() {
        return STANDARD_VARIATION.to_string();
    }
    sorted_exceptions(exceptions).join(", ")
}

/// Exceptions in lexicographic order
pub fn sorted_exceptions(exceptions: &[String]) -> Vec<String> {
    let mut sorted = exceptions.to_vec();
    sorted.sort();
    sorted
}
