//! Catalog of string format rules
//!
//! Each constant is a [`StringRule`] wrapping one of the predicate functions
//! in the family modules below. Like every `StringRule`, catalog rules pass
//! empty text and absent values; combine them with
//! [`REQUIRED`](crate::REQUIRED) when the field must be present.
//!
//! # Example
//!
//! ```
//! use tideline::rule::{validate, Rule, WithMessage, REQUIRED};
//! use tideline::is;
//!
//! assert!(is::IPV4.validate("74.125.19.99").is_ok());
//! assert_eq!(is::IPV4.validate("2001:4860:0:2001::68").unwrap_err().to_string(), "ipv4");
//! assert!(is::IPV4.validate("").is_ok());
//!
//! let host = String::from("abc%");
//! let err = validate(&host, &[&REQUIRED, &is::HOST.with_message("bad_host")]).unwrap_err();
//! assert_eq!(err.to_string(), "bad_host");
//!
//! assert_eq!(is::by_tag("hex_color").map(|rule| rule.message()), Some("hex_color"));
//! ```

pub mod encoding;
pub mod identifier;
pub mod network;
pub mod numeric;
pub mod text;

mod country;

use regex::Regex;

use crate::rule::{StringRule, WithMessage};

// Only called on literal patterns, which the tests below compile.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid catalog pattern")
}

macro_rules! catalog {
    ($($(#[$doc:meta])* $name:ident = $predicate:path, $tag:literal;)+) => {
        $(
            $(#[$doc])*
            pub const $name: StringRule = StringRule::new($predicate, $tag);
        )+

        /// Every catalog rule, in declaration order.
        pub static ALL: &[StringRule] = &[$($name),+];
    };
}

catalog! {
    /// Email address (`email`).
    EMAIL = network::is_email, "email";
    /// URL with an optional web scheme (`url`).
    URL = network::is_url, "url";
    /// Absolute request URL (`request_url`).
    REQUEST_URL = network::is_request_url, "request_url";
    /// Absolute URL or absolute path (`request_uri`).
    REQUEST_URI = network::is_request_uri, "request_uri";
    /// IPv4 or IPv6 address (`ip`).
    IP = network::is_ip, "ip";
    /// IPv4 address (`ipv4`).
    IPV4 = network::is_ipv4, "ipv4";
    /// IPv6 address (`ipv6`).
    IPV6 = network::is_ipv6, "ipv6";
    /// MAC address (`mac`).
    MAC = network::is_mac, "mac";
    /// DNS name (`dns`).
    DNS_NAME = network::is_dns_name, "dns";
    /// Domain name (`domain`).
    DOMAIN = network::is_domain, "domain";
    /// Single DNS label (`subdomain`).
    SUBDOMAIN = network::is_subdomain, "subdomain";
    /// IP address or DNS name (`ip_or_dns`).
    HOST = network::is_host, "ip_or_dns";
    /// Port number (`port`).
    PORT = network::is_port, "port";
    /// `host:port` dial string (`dial`).
    DIAL_STRING = network::is_dial_string, "dial";

    /// UUID of any version (`uuid`).
    UUID = identifier::is_uuid, "uuid";
    /// Version 3 UUID (`uuid3`).
    UUID_V3 = identifier::is_uuid_v3, "uuid3";
    /// Version 4 UUID (`uuid4`).
    UUID_V4 = identifier::is_uuid_v4, "uuid4";
    /// Version 5 UUID (`uuid5`).
    UUID_V5 = identifier::is_uuid_v5, "uuid5";
    /// MongoDB ObjectId (`mongodb_object_id`).
    MONGO_ID = identifier::is_mongo_id, "mongodb_object_id";
    /// ISBN-10 (`isbn10`).
    ISBN10 = identifier::is_isbn10, "isbn10";
    /// ISBN-13 (`isbn13`).
    ISBN13 = identifier::is_isbn13, "isbn13";
    /// ISBN-10 or ISBN-13 (`isbn`).
    ISBN = identifier::is_isbn, "isbn";
    /// Credit card number (`credit_card`).
    CREDIT_CARD = identifier::is_credit_card, "credit_card";
    /// US social security number (`ssn`).
    SSN = identifier::is_ssn, "ssn";
    /// ISO 3166-1 alpha-2 code (`country_code2`).
    COUNTRY_CODE2 = identifier::is_country_code2, "country_code2";
    /// ISO 3166-1 alpha-3 code (`country_code3`).
    COUNTRY_CODE3 = identifier::is_country_code3, "country_code3";
    /// Semantic version (`semver`).
    SEMVER = identifier::is_semver, "semver";

    /// Base64 (`base64`).
    BASE64 = encoding::is_base64, "base64";
    /// Base64 data URI (`base64_uri`).
    DATA_URI = encoding::is_data_uri, "base64_uri";
    /// Hexadecimal digits (`hex`).
    HEXADECIMAL = encoding::is_hexadecimal, "hex";
    /// Hex color (`hex_color`).
    HEX_COLOR = encoding::is_hex_color, "hex_color";
    /// `rgb(r, g, b)` color (`rgb_color`).
    RGB_COLOR = encoding::is_rgb_color, "rgb_color";
    /// JSON document (`json`).
    JSON = encoding::is_json, "json";

    /// ASCII letters (`alpha`).
    ALPHA = text::is_alpha, "alpha";
    /// ASCII digits (`digits`).
    DIGIT = text::is_digit, "digits";
    /// ASCII letters and digits (`alphanumeric`).
    ALPHANUMERIC = text::is_alphanumeric, "alphanumeric";
    /// Unicode letters (`utf_alpha`).
    UTF_LETTER = text::is_utf_letter, "utf_alpha";
    /// Unicode decimal digits (`utf_digits`).
    UTF_DIGIT = text::is_utf_digit, "utf_digits";
    /// Unicode letters and numbers (`utf_alphanumeric`).
    UTF_LETTER_NUMERIC = text::is_utf_letter_numeric, "utf_alphanumeric";
    /// Unicode numbers (`utf_numeric`).
    UTF_NUMERIC = text::is_utf_numeric, "utf_numeric";
    /// Lowercase text (`lowercase`).
    LOWER_CASE = text::is_lower_case, "lowercase";
    /// Uppercase text (`uppercase`).
    UPPER_CASE = text::is_upper_case, "uppercase";
    /// ASCII characters (`ascii_chars`).
    ASCII = text::is_ascii, "ascii_chars";
    /// Printable ASCII characters (`ascii_chars_print`).
    PRINTABLE_ASCII = text::is_printable_ascii, "ascii_chars_print";
    /// Contains a non-ASCII character (`multibyte_chars`).
    MULTIBYTE = text::is_multibyte, "multibyte_chars";
    /// Contains a full-width character (`full_width_chars`).
    FULL_WIDTH = text::is_full_width, "full_width_chars";
    /// Contains a half-width character (`half_width_chars`).
    HALF_WIDTH = text::is_half_width, "half_width_chars";
    /// Mixes full-width and half-width characters (`both_width_chars`).
    VARIABLE_WIDTH = text::is_variable_width, "both_width_chars";

    /// Integer (`number_integer`).
    INT = numeric::is_int, "number_integer";
    /// Floating point number (`number_float`).
    FLOAT = numeric::is_float, "number_float";
    /// Latitude (`latitude`).
    LATITUDE = numeric::is_latitude, "latitude";
    /// Longitude (`longitude`).
    LONGITUDE = numeric::is_longitude, "longitude";
}

/// Look up a catalog rule by its tag.
///
/// ```
/// use tideline::is;
///
/// assert!(is::by_tag("ipv6").is_some());
/// assert!(is::by_tag("zip_code").is_none());
/// ```
pub fn by_tag(tag: &str) -> Option<&'static StringRule> {
    ALL.iter().find(|rule| rule.message() == tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_tags_are_unique() {
        let tags: HashSet<_> = ALL.iter().map(|rule| rule.message()).collect();
        assert_eq!(tags.len(), ALL.len());
        assert_eq!(ALL.len(), 52);
    }

    #[test]
    fn test_every_pattern_compiles() {
        // Forces each LazyLock; a bad literal pattern panics here.
        for rule in ALL {
            let _ = rule.validate("x");
        }
    }

    #[test]
    fn test_every_rule_accepts_empty_and_absent() {
        for rule in ALL {
            assert_eq!(rule.validate(""), Ok(()), "{}", rule.message());
            assert_eq!(rule.validate(&None::<String>), Ok(()), "{}", rule.message());
        }
    }

    #[test]
    fn test_by_tag() {
        assert_eq!(by_tag("email").map(|rule| rule.message()), Some("email"));
        assert_eq!(by_tag("ip_or_dns").map(|rule| rule.message()), Some("ip_or_dns"));
        assert!(by_tag("").is_none());
    }

    #[test]
    fn test_by_tag_finds_working_rule() {
        let rule = by_tag("mongodb_object_id").unwrap();
        assert!(rule.validate("507f1f77bcf86cd799439011").is_ok());
        assert!(rule.validate("507f1f77bcf86cd79943901").is_err());
    }
}
