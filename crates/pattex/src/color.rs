//! Concrete color values and hex parsing.
//!
//! Supports:
//! - Hex: `#RGB`, `#RRGGBB` (case-insensitive, `#` optional)
//! - Free-form channel text from custom RGB fields (clamped, never fails)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque 8-bit RGB color.
///
/// Serializes as a `[r, g, b]` triplet, the shape color catalogs use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }

        // All ASCII past this point, so byte slicing is safe.
        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };

        match hex.len() {
            3 => Ok(Self::new(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(Error::InvalidHex(s.to_string())),
        }
    }

    /// Build a color from three free-form text fields.
    ///
    /// Blank or non-numeric text reads as 0; numbers clamp into 0..=255.
    /// This never fails, so a half-typed custom color still renders.
    pub fn from_channel_text(r: &str, g: &str, b: &str) -> Self {
        fn channel(text: &str) -> u8 {
            match text.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v.round().clamp(0.0, 255.0) as u8,
                _ => 0,
            }
        }
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl From<Rgb> for tiny_skia::Color {
    fn from(c: Rgb) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, 255)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::from_hex("#dc143c").unwrap(), Rgb::new(220, 20, 60));
        assert_eq!(Rgb::from_hex("DC143C").unwrap(), Rgb::new(220, 20, 60));
        assert_eq!(Rgb::from_hex("#f0a").unwrap(), Rgb::new(255, 0, 170));
    }

    #[test]
    fn rejects_bad_hex() {
        for bad in ["", "#", "#12", "#12345", "#gg0000", "#1234567", "#ééé"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(Error::InvalidHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_formatting_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000aff");
        let c = Rgb::new(173, 216, 230);
        assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn channel_text_is_forgiving() {
        assert_eq!(Rgb::from_channel_text("12", " 34 ", "56"), Rgb::new(12, 34, 56));
        assert_eq!(Rgb::from_channel_text("", "abc", "300"), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_channel_text("-5", "12.6", "NaN"), Rgb::new(0, 13, 0));
    }

    #[test]
    fn serializes_as_triplet() {
        let c: Rgb = serde_json::from_str("[245, 245, 220]").unwrap();
        assert_eq!(c, Rgb::new(245, 245, 220));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[245,245,220]");
        assert!(serde_json::from_str::<Rgb>("[256, 0, 0]").is_err());
    }
}
