//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as its canonical "#RRGGBB" hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure white, the color a room is reset to.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use paintcalc::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidColor`] unless the string holds
    /// exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // from_str_radix tolerates a leading '+', so check digits up front
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidColor(trimmed.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ValidationError::InvalidColor(trimmed.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use paintcalc::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the channels as an `(r, g, b)` tuple.
    #[must_use]
    pub const fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Perceptual brightness on a 0-255 scale (ITU-R BT.601 luma weights).
    ///
    /// # Examples
    ///
    /// ```
    /// use paintcalc::models::RgbColor;
    ///
    /// assert!((RgbColor::WHITE.brightness() - 255.0).abs() < 1e-9);
    /// assert_eq!(RgbColor::BLACK.brightness(), 0.0);
    /// ```
    #[must_use]
    pub fn brightness(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Returns the channel-wise inverse (`255 - channel`).
    #[must_use]
    pub const fn inverted(&self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Returns the color with each channel offset by the given amount,
    /// clamped to 0-255.
    #[must_use]
    pub fn shifted(&self, dr: i16, dg: i16, db: i16) -> Self {
        Self::new(
            shift_channel(self.r, dr),
            shift_channel(self.g, dg),
            shift_channel(self.b, db),
        )
    }
}

#[allow(clippy::cast_sign_loss)]
fn shift_channel(value: u8, delta: i16) -> u8 {
    (i16::from(value) + delta).clamp(0, 255) as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for RgbColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("+F+F+F").is_err());
        assert!(RgbColor::from_hex("##FFFFFF").is_err());
        assert!(RgbColor::from_hex("ééé").is_err());
    }

    #[test]
    fn test_from_hex_error_kind() {
        assert_eq!(
            RgbColor::from_hex("#12345"),
            Err(ValidationError::InvalidColor("#12345".to_string()))
        );
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::from_hex("#ff6b6b").unwrap().to_hex(), "#FF6B6B");
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_brightness_weights() {
        assert!((RgbColor::new(255, 0, 0).brightness() - 76.245).abs() < 1e-9);
        assert!((RgbColor::new(0, 255, 0).brightness() - 149.685).abs() < 1e-9);
        assert!((RgbColor::new(0, 0, 255).brightness() - 29.07).abs() < 1e-9);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(RgbColor::WHITE.inverted(), RgbColor::BLACK);
        assert_eq!(
            RgbColor::new(10, 200, 128).inverted(),
            RgbColor::new(245, 55, 127)
        );
    }

    #[test]
    fn test_shifted_clamps() {
        let color = RgbColor::new(240, 10, 128);
        assert_eq!(color.shifted(30, -30, 0), RgbColor::new(255, 0, 128));
        assert_eq!(color.shifted(-300, 300, 5), RgbColor::new(0, 255, 133));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(69, 183, 209)).unwrap();
        assert_eq!(json, "\"#45B7D1\"");

        let parsed: RgbColor = serde_json::from_str("\"#45b7d1\"").unwrap();
        assert_eq!(parsed, RgbColor::new(69, 183, 209));

        assert!(serde_json::from_str::<RgbColor>("\"blue\"").is_err());
    }
}
