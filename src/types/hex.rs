//! Hex string codec for [`Rgba`].
//!
//! Two entry points share one normalization rule:
//!
//! - [`Rgba::from_hex`] is total. Unknown characters decode as `0`.
//! - [`str::parse::<Rgba>`] is strict and reports bad input as
//!   [`ColorError::Parse`].
//!
//! Normalization: pad with trailing `'0'` to 4 characters; a 4-character
//! string doubles every digit (`"1A2B"` becomes `"11AA22BB"`, the CSS
//! `#RGBA` shorthand); pad again to 8 characters and drop anything past 8.
//! The result is read as `RRGGBBAA`.
//!
//! Note the padding side: `"FF0000"` becomes `"FF000000"`, which has zero
//! alpha, and `"F00"` becomes `"FF000000"` as well.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

use super::packed::{Color32, PackedColor};
use super::Rgba;

const DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Decode a single hex digit, case-insensitively. Anything else is `0`.
pub fn decode_digit(c: char) -> u8 {
    match c {
        '0'..='9' => c as u8 - b'0',
        'a'..='f' => c as u8 - b'a' + 10,
        'A'..='F' => c as u8 - b'A' + 10,
        _ => 0,
    }
}

/// Encode the low four bits of `nibble` as an uppercase hex digit.
pub fn encode_digit(nibble: u8) -> char {
    DIGITS[(nibble & 0xF) as usize]
}

/// Apply the pad / double / truncate rule, yielding exactly 8 characters.
fn normalize(s: &str) -> Vec<char> {
    let mut digits: Vec<char> = s.chars().collect();
    if digits.len() < 4 {
        digits.resize(4, '0');
    }
    if digits.len() == 4 {
        digits = digits.iter().flat_map(|&c| [c, c]).collect();
    }
    digits.resize(8, '0');
    digits
}

impl Rgba {
    /// Build a colour from a hex string without ever failing.
    ///
    /// See the [module docs](self) for the padding rule. Characters that are
    /// not hex digits decode as `0`, so garbage input produces a dark,
    /// transparent-ish colour rather than an error.
    ///
    /// ```
    /// use colorkit::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("F00").rgba(), [1.0, 0.0, 0.0, 0.0]);
    /// assert_eq!(Rgba::from_hex("ff0000ff"), Rgba::rgb(1.0, 0.0, 0.0));
    /// ```
    pub fn from_hex(s: &str) -> Self {
        let bits = normalize(s)
            .into_iter()
            .fold(0u32, |acc, c| (acc << 4) | u32::from(decode_digit(c)));
        Color32::from_bits(bits).to_float()
    }

    /// Parse a hex string strictly.
    ///
    /// Accepts an optional leading `#` and surrounding whitespace, then 1 to
    /// 8 hex digits, normalized the same way as [`Rgba::from_hex`].
    pub fn parse_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if hex.is_empty() || hex.chars().count() > 8 {
            return Err(ColorError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use 1 to 8 hex digits, e.g. F00, F008 or FF8000FF".to_string()),
            });
        }

        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::Parse {
                message: format!("Invalid hex digit '{}' in colour: {}", bad, s),
                help: None,
            });
        }

        Ok(Self::from_hex(hex))
    }

    /// Format as an 8-digit uppercase `RRGGBBAA` string.
    pub fn to_hex(self) -> String {
        let bits = self.to_color32().bits();
        (0..8)
            .map(|i| encode_digit((bits >> (28 - 4 * i)) as u8))
            .collect()
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_table() {
        for (i, c) in "0123456789ABCDEF".chars().enumerate() {
            assert_eq!(decode_digit(c), i as u8);
            assert_eq!(decode_digit(c.to_ascii_lowercase()), i as u8);
            assert_eq!(encode_digit(i as u8), c);
        }
        assert_eq!(decode_digit('g'), 0);
        assert_eq!(decode_digit('#'), 0);
        assert_eq!(decode_digit('é'), 0);
        assert_eq!(encode_digit(0x1F), 'F');
    }

    #[test]
    fn test_normalize() {
        let s = |v: Vec<char>| v.into_iter().collect::<String>();
        assert_eq!(s(normalize("")), "00000000");
        assert_eq!(s(normalize("F00")), "FF000000");
        assert_eq!(s(normalize("1A2B")), "11AA22BB");
        assert_eq!(s(normalize("FF000")), "FF000000");
        assert_eq!(s(normalize("FF0000")), "FF000000");
        assert_eq!(s(normalize("0123456789")), "01234567");
    }

    #[test]
    fn test_from_hex_shorthand_red() {
        let c = Rgba::from_hex("F00");
        assert_eq!(c.rgba(), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_hex_doubling() {
        let c = Rgba::from_hex("F008");
        assert_eq!(c.to_color32().bits(), 0xFF00_0088);
    }

    #[test]
    fn test_from_hex_garbage_is_zero() {
        assert_eq!(Rgba::from_hex("zzzzzzzz"), Rgba::TRANSPARENT);
        assert_eq!(Rgba::from_hex("FFxx00FF").to_color32().bits(), 0xFF00_00FF);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::rgb(1.0, 0.0, 0.0).to_hex(), "FF0000FF");
        assert_eq!(Rgba::TRANSPARENT.to_hex(), "00000000");
        assert_eq!(Rgba::from_hex("1a2b3c4d").to_hex(), "1A2B3C4D");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rgba::WHITE), "FFFFFFFF");
    }

    #[test]
    fn test_parse_strict() {
        let c: Rgba = "#FF8000FF".parse().unwrap();
        assert_eq!(c.to_hex(), "FF8000FF");

        let c: Rgba = "  f00f ".parse().unwrap();
        assert_eq!(c, Rgba::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_strict_errors() {
        assert!(matches!("".parse::<Rgba>(), Err(ColorError::Parse { .. })));
        assert!(matches!("#".parse::<Rgba>(), Err(ColorError::Parse { .. })));
        assert!(matches!("#GGG".parse::<Rgba>(), Err(ColorError::Parse { .. })));
        assert!(matches!("123456789".parse::<Rgba>(), Err(ColorError::Parse { .. })));
    }
}
