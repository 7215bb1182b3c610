//! Numeric string predicates

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

static INT: LazyLock<Regex> = LazyLock::new(|| compile(r"^[-+]?(?:0|[1-9][0-9]*)$"));
static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:[-+]?[0-9]+)?(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$")
});
static LATITUDE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[-+]?(?:[1-8]?[0-9](?:\.[0-9]+)?|90(?:\.0+)?)$"));
static LONGITUDE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7][0-9]|[1-9]?[0-9])(?:\.[0-9]+)?)$")
});

/// Decimal integer without leading zeros.
pub fn is_int(value: &str) -> bool {
    INT.is_match(value)
}

/// Decimal number with optional fraction and exponent.
pub fn is_float(value: &str) -> bool {
    // The pattern alone also accepts "." and "e5".
    let mantissa = value.split(['e', 'E']).next().unwrap_or_default();
    FLOAT.is_match(value) && mantissa.bytes().any(|b| b.is_ascii_digit())
}

/// Latitude in degrees, `-90..=90`.
pub fn is_latitude(value: &str) -> bool {
    LATITUDE.is_match(value)
}

/// Longitude in degrees, `-180..=180`.
pub fn is_longitude(value: &str) -> bool {
    LONGITUDE.is_match(value)
}
