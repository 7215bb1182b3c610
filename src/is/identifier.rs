//! Identifier predicates: UUIDs, ISBNs, card numbers, country codes

use std::sync::LazyLock;

use regex::Regex;
use uuid::{Uuid, Variant};

use super::compile;
use super::country::COUNTRIES;
use crate::predicate::{Predicate, PredicateExt};

static ISBN10: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?:[0-9]{9}X|[0-9]{10})$"));
static ISBN13: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{13}$"));
static CREDIT_CARD: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?",
        r"|5[1-5][0-9]{14}",
        r"|(?:222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}",
        r"|6(?:011|5[0-9][0-9])[0-9]{12}",
        r"|3[47][0-9]{13}",
        r"|3(?:0[0-5]|[68][0-9])[0-9]{11}",
        r"|(?:2131|1800|35[0-9]{3})[0-9]{11})$",
    ))
});
static SSN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[0-9]{3}[- ]?[0-9]{2}[- ]?[0-9]{4}$"));

// Only the canonical 36 character hyphenated form is accepted.
fn hyphenated_uuid(value: &str) -> Option<Uuid> {
    if value.len() != 36 {
        return None;
    }
    Uuid::try_parse(value).ok()
}

/// UUID in hyphenated form, any version.
pub fn is_uuid(value: &str) -> bool {
    hyphenated_uuid(value).is_some()
}

/// Version 3 (MD5 name-based) UUID.
pub fn is_uuid_v3(value: &str) -> bool {
    hyphenated_uuid(value).is_some_and(|uuid| uuid.get_version_num() == 3)
}

/// Version 4 (random) UUID with the RFC 4122 variant.
pub fn is_uuid_v4(value: &str) -> bool {
    hyphenated_uuid(value)
        .is_some_and(|uuid| uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122)
}

/// Version 5 (SHA-1 name-based) UUID with the RFC 4122 variant.
pub fn is_uuid_v5(value: &str) -> bool {
    hyphenated_uuid(value)
        .is_some_and(|uuid| uuid.get_version_num() == 5 && uuid.get_variant() == Variant::RFC4122)
}

/// MongoDB ObjectId: 24 hex digits.
pub fn is_mongo_id(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}

/// ISBN-10 with a valid check digit (`X` stands for ten). Hyphens and
/// spaces are ignored.
pub fn is_isbn10(value: &str) -> bool {
    let sanitized = strip_separators(value);
    if !ISBN10.is_match(&sanitized) {
        return false;
    }
    let bytes = sanitized.as_bytes();
    let mut checksum: u32 = bytes[..9]
        .iter()
        .zip(1..)
        .map(|(b, weight)| weight * digit(*b))
        .sum();
    checksum += 10 * if bytes[9] == b'X' { 10 } else { digit(bytes[9]) };
    checksum % 11 == 0
}

/// ISBN-13 with a valid check digit. Hyphens and spaces are ignored.
pub fn is_isbn13(value: &str) -> bool {
    let sanitized = strip_separators(value);
    if !ISBN13.is_match(&sanitized) {
        return false;
    }
    let bytes = sanitized.as_bytes();
    let checksum: u32 = bytes[..12]
        .iter()
        .enumerate()
        .map(|(i, b)| if i % 2 == 0 { digit(*b) } else { 3 * digit(*b) })
        .sum();
    digit(bytes[12]) == (10 - checksum % 10) % 10
}

/// ISBN-10 or ISBN-13.
pub fn is_isbn(value: &str) -> bool {
    is_isbn10.or(is_isbn13).check(value)
}

/// Card number from a known issuer range that passes the Luhn check.
/// Hyphens and spaces are ignored.
pub fn is_credit_card(value: &str) -> bool {
    let sanitized = strip_separators(value);
    CREDIT_CARD.is_match(&sanitized) && luhn(&sanitized)
}

fn luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = digit(b);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// US social security number, `AAA-GG-SSSS` (dashes or spaces).
pub fn is_ssn(value: &str) -> bool {
    value.len() == 11 && SSN.is_match(value)
}

/// ISO 3166-1 alpha-2 country code, uppercase.
pub fn is_country_code2(value: &str) -> bool {
    COUNTRIES.iter().any(|(alpha2, _)| *alpha2 == value)
}

/// ISO 3166-1 alpha-3 country code, uppercase.
pub fn is_country_code3(value: &str) -> bool {
    COUNTRIES.iter().any(|(_, alpha3)| *alpha3 == value)
}

/// Semantic version, with an optional leading `v`.
pub fn is_semver(value: &str) -> bool {
    let version = value.strip_prefix('v').unwrap_or(value);
    semver::Version::parse(version).is_ok()
}
