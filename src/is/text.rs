//! Character class predicates

use std::sync::LazyLock;

use regex::Regex;

use super::compile;
use crate::predicate::{all_chars, any_char, Predicate, PredicateExt};

static DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+$"));
static UTF_LETTER: LazyLock<Regex> = LazyLock::new(|| compile(r"^\p{L}+$"));
static UTF_DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"^[-+]?\p{Nd}+$"));
static UTF_LETTER_NUMERIC: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\p{L}\p{N}]+$"));
// A character outside the ASCII and halfwidth-form ranges.
static FULL_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"[^\x{20}-\x{7E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]")
});
static HALF_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"[\x{20}-\x{7E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]")
});

/// ASCII letters only.
pub fn is_alpha(value: &str) -> bool {
    all_chars(|c: char| c.is_ascii_alphabetic()).check(value)
}

/// ASCII digits only.
pub fn is_digit(value: &str) -> bool {
    DIGIT.is_match(value)
}

/// ASCII letters and digits only.
pub fn is_alphanumeric(value: &str) -> bool {
    all_chars(|c: char| c.is_ascii_alphanumeric()).check(value)
}

/// Unicode letters only.
pub fn is_utf_letter(value: &str) -> bool {
    UTF_LETTER.is_match(value)
}

/// Unicode decimal digits, with an optional leading sign.
pub fn is_utf_digit(value: &str) -> bool {
    UTF_DIGIT.is_match(value)
}

/// Unicode letters and numbers only.
pub fn is_utf_letter_numeric(value: &str) -> bool {
    UTF_LETTER_NUMERIC.is_match(value)
}

/// Every character is in a Unicode number category.
pub fn is_utf_numeric(value: &str) -> bool {
    all_chars(char::is_numeric).check(value)
}

/// Unchanged by lowercasing.
pub fn is_lower_case(value: &str) -> bool {
    value.to_lowercase() == value
}

/// Unchanged by uppercasing.
pub fn is_upper_case(value: &str) -> bool {
    value.to_uppercase() == value
}

/// ASCII characters only.
pub fn is_ascii(value: &str) -> bool {
    value.is_ascii()
}

/// Printable ASCII (`0x20..=0x7E`) only.
pub fn is_printable_ascii(value: &str) -> bool {
    all_chars(|c: char| matches!(c, ' '..='~')).check(value)
}

/// Contains at least one non-ASCII character.
pub fn is_multibyte(value: &str) -> bool {
    any_char(|c: char| !c.is_ascii()).check(value)
}

/// Contains at least one full-width character.
pub fn is_full_width(value: &str) -> bool {
    FULL_WIDTH.is_match(value)
}

/// Contains at least one half-width character.
pub fn is_half_width(value: &str) -> bool {
    HALF_WIDTH.is_match(value)
}

/// Mixes full-width and half-width characters.
pub fn is_variable_width(value: &str) -> bool {
    is_full_width.and(is_half_width).check(value)
}
