//! Encoding predicates: base64, data URIs, hex, colors, JSON

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;

use super::compile;

static DATA_URI_HEADER: LazyLock<Regex> = LazyLock::new(|| compile(r"^data:.+/(.+);base64$"));
static HEXADECIMAL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9a-fA-F]+$"));
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$"));
static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    let channel = r"\s*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])\s*";
    compile(&format!(r"^rgb\({channel},{channel},{channel}\)$"))
});

/// Standard padded base64.
pub fn is_base64(value: &str) -> bool {
    STANDARD.decode(value).is_ok()
}

/// `data:<type>/<subtype>;base64,<payload>` with a valid base64 payload.
pub fn is_data_uri(value: &str) -> bool {
    let Some((header, payload)) = value.split_once(',') else {
        return false;
    };
    DATA_URI_HEADER.is_match(header) && is_base64(payload)
}

/// Hexadecimal digits, either case.
pub fn is_hexadecimal(value: &str) -> bool {
    HEXADECIMAL.is_match(value)
}

/// Three or six digit hex color, with an optional leading `#`.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// `rgb(r, g, b)` with channels in `0..=255`.
pub fn is_rgb_color(value: &str) -> bool {
    RGB_COLOR.is_match(value)
}

/// Well-formed JSON document.
pub fn is_json(value: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(value).is_ok()
}
