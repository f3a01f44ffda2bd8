//! Color suggestions, tone buckets and the combined color report.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Coarse qualitative bucket for a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Very bright colors
    Light,
    /// Red-dominant colors
    Warm,
    /// Blue-dominant colors
    Cool,
    /// Dark colors without a dominant red or blue
    Bold,
    /// Everything else
    Neutral,
}

impl Tone {
    /// Lowercase identifier used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Bold => "bold",
            Self::Neutral => "neutral",
        }
    }

    /// Room-suitability advice for colors of this tone.
    #[must_use]
    pub const fn suitability(&self) -> &'static str {
        match self {
            Self::Light => {
                "Light shades make rooms feel larger and brighter. Great for small bedrooms, bathrooms and kitchens."
            }
            Self::Warm => {
                "Warm shades create a cozy, welcoming feel. Well suited to living rooms and dining areas."
            }
            Self::Cool => {
                "Cool shades are calming and restful. A good fit for bedrooms and bathrooms."
            }
            Self::Bold => {
                "Bold, deep shades make a statement. Best used on an accent wall in a well-lit living room."
            }
            Self::Neutral => {
                "Neutral shades are versatile and timeless. They work in any room and pair with most decor."
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complementary and analogous colors derived from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSuggestionSet {
    /// The color the suggestions were derived from
    pub base: RgbColor,
    /// Channel-wise inverse of the base
    pub complementary: RgbColor,
    /// Two neighboring shades
    pub analogous: [RgbColor; 2],
}

/// Everything the visualizer shows about one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Canonical hex string ("#RRGGBB")
    pub hex: String,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Perceptual brightness (0-255)
    pub brightness: f64,
    /// Tone bucket
    pub tone: Tone,
    /// Room-suitability advice for the tone
    pub suitability: String,
    /// Derived complementary and analogous colors
    pub suggestions: ColorSuggestionSet,
}
