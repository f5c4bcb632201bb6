// hex-rewrite/src/literal.rs
use crate::{HexRewriteError, HexRewriteResult};
use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a `0x`-prefixed 20-byte account address
pub const ADDRESS_LEN: usize = 42;

static HEX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x[0-9A-Fa-f]+").expect("hex literal pattern is valid"));

/// A `0x`-prefixed run of hex digits found in some text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLiteral<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> HexLiteral<'t> {
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Byte offset of the `0` of the prefix
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last digit
    pub fn end(&self) -> usize {
        self.end
    }

    /// The digits after the `0x` prefix
    pub fn digits(&self) -> &'t str {
        &self.text[2..]
    }

    pub fn is_address(&self) -> bool {
        is_address(self.text)
    }

    fn value(&self) -> BigUint {
        // A match never holds anything but hex digits after the prefix.
        BigUint::parse_bytes(self.digits().as_bytes(), 16).unwrap_or_default()
    }

    pub fn to_decimal(&self) -> String {
        self.value().to_str_radix(10)
    }
}

/// Iterate over every hex literal in `text`, leftmost first, never overlapping.
///
/// Each match is maximal: digits are consumed until the first non-hex
/// character, so `0x1g` yields `0x1`.
pub fn literals(text: &str) -> impl Iterator<Item = HexLiteral<'_>> {
    HEX_LITERAL.find_iter(text).map(|m| HexLiteral {
        text: m.as_str(),
        start: m.start(),
        end: m.end(),
    })
}

/// Whether `s` has the shape of an account address: `0x` followed by exactly 40 hex digits.
pub fn is_address(s: &str) -> bool {
    s.len() == ADDRESS_LEN
        && s.starts_with("0x")
        && s[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Convert a single hex literal to its decimal representation.
///
/// Accepts an `0x`/`0X` prefix and tolerates the value being wrapped in
/// double quotes, as it appears inside JSON documents.
pub fn hex_to_decimal(hex: &str) -> HexRewriteResult<String> {
    let trimmed = hex
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(hex);

    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| HexRewriteError::InvalidLiteral(hex.to_string()))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexRewriteError::InvalidLiteral(hex.to_string()));
    }

    let value = BigUint::from_str_radix(digits, 16)
        .map_err(|_| HexRewriteError::InvalidLiteral(hex.to_string()))?;
    Ok(value.to_str_radix(10))
}
