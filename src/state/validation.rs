/// Input validation for the listing form
///
/// Both predicates look at the proposed next value of a field, before it
/// is committed to the form. A rejected value leaves the field untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of words allowed in a description
pub const MAX_DESCRIPTION_WORDS: usize = 150;

/// Message shown when a keystroke would push the description over the limit
pub const DESCRIPTION_LIMIT_MESSAGE: &str = "Description cannot exceed 150 words.";

/// Up to 8 ASCII digits, optionally followed by a dot and up to 2 decimals
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,8}(\.[0-9]{0,2})?$").expect("price pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Check whether a price input may be committed
///
/// Accepts the empty string so the field can be cleared, and partial
/// decimals such as `"12."` so the user can keep typing.
pub fn validate_price(input: &str) -> bool {
    input.is_empty() || PRICE_PATTERN.is_match(input)
}

/// Count the pieces left after splitting on runs of whitespace
///
/// Leading and trailing runs leave an empty piece on their side, and those
/// count too: `""` is one piece, `"a b "` is three.
pub fn word_count(input: &str) -> usize {
    WHITESPACE_RUN.find_iter(input).count() + 1
}

/// Check whether a description input may be committed
pub fn validate_description(input: &str) -> bool {
    word_count(input) <= MAX_DESCRIPTION_WORDS
}
