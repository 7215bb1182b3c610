//! Network address and name predicates

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use url::{Host, Url};

use super::compile;
use crate::predicate::{Predicate, PredicateExt};

const MAX_URL_LEN: usize = 2083;
const MIN_URL_LEN: usize = 3;
const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "tcp", "udp", "ws", "wss"];

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
});
static DNS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62}(?:\.[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})*[._]?$")
});
static SUBDOMAIN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?$"));
// The 255 byte cap is checked separately; the regex engine has no lookaround.
static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{1,63}|xn--[a-z0-9]{1,59})$")
});

/// Email address: `local@domain` with at least one dot in the domain.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// URL with an optional web scheme and a host that is an IP, `localhost`,
/// or a dotted DNS name.
pub fn is_url(value: &str) -> bool {
    if value.len() <= MIN_URL_LEN || value.len() >= MAX_URL_LEN || value.starts_with('.') {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let parsed = if value.contains("://") {
        Url::parse(value)
    } else {
        Url::parse(&format!("http://{value}"))
    };
    let Ok(url) = parsed else {
        return false;
    };
    if !URL_SCHEMES.contains(&url.scheme()) {
        return false;
    }
    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        Some(Host::Domain(domain)) => {
            domain == "localhost" || (domain.contains('.') && is_dns_name(domain))
        }
        None => false,
    }
}

/// Absolute URL with a scheme, as sent in an HTTP request line.
pub fn is_request_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| !url.scheme().is_empty())
}

/// Absolute URL, or an absolute path starting with `/`.
pub fn is_request_uri(value: &str) -> bool {
    value.starts_with('/') || Url::parse(value).is_ok()
}

/// IPv4 or IPv6 address.
pub fn is_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// Dotted-quad IPv4 address.
pub fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// IPv6 address.
pub fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

/// IEEE 802 MAC-48, EUI-64 or 20-octet InfiniBand address.
///
/// Octets are written as `aa:bb:…` or `aa-bb-…`, or as dot-separated
/// groups of four hex digits (`0123.4567.89ab`).
pub fn is_mac(value: &str) -> bool {
    let octets = if value.contains('.') {
        hex_groups(value, '.', 4)
    } else if value.contains(':') {
        hex_groups(value, ':', 2)
    } else if value.contains('-') {
        hex_groups(value, '-', 2)
    } else {
        None
    };
    matches!(octets, Some(6 | 8 | 20))
}

// Number of octets, when every group is `width` hex digits.
fn hex_groups(value: &str, separator: char, width: usize) -> Option<usize> {
    let mut octets = 0;
    for group in value.split(separator) {
        if group.len() != width || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        octets += width / 2;
    }
    Some(octets)
}

/// DNS name of labels up to 63 characters, at most 255 characters without
/// dots, and not an IP address.
pub fn is_dns_name(value: &str) -> bool {
    if value.is_empty() || value.replace('.', "").len() > 255 {
        return false;
    }
    !is_ip(value) && DNS_NAME.is_match(value)
}

/// A single DNS label.
pub fn is_subdomain(value: &str) -> bool {
    SUBDOMAIN.is_match(value)
}

/// Lowercase dotted domain with an alphabetic or `xn--` top-level label.
pub fn is_domain(value: &str) -> bool {
    value.len() <= 255 && DOMAIN.is_match(value)
}

/// IP address or DNS name.
pub fn is_host(value: &str) -> bool {
    is_ip.or(is_dns_name).check(value)
}

/// Port number in `1..=65535`.
pub fn is_port(value: &str) -> bool {
    value.parse::<u16>().is_ok_and(|port| port > 0)
}

/// `host:port` suitable for dialing, with IPv6 hosts in brackets.
pub fn is_dial_string(value: &str) -> bool {
    split_host_port(value).is_some_and(|(host, port)| {
        !host.is_empty() && (is_dns_name(host) || is_ip(host)) && is_port(port)
    })
}

fn split_host_port(value: &str) -> Option<(&str, &str)> {
    if let Some(rest) = value.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        return Some((host, tail.strip_prefix(':')?));
    }
    let (host, port) = value.rsplit_once(':')?;
    if host.contains(':') {
        return None;
    }
    Some((host, port))
}
