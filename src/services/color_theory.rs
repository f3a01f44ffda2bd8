//! Complementary and analogous color suggestions.
//!
//! Suggestions are direct channel arithmetic on the RGB triple; no hue
//! rotation is involved. Analogous shades nudge two channels by a fixed
//! offset and clamp to the 0-255 range.

use crate::constants::ANALOGOUS_SHIFT;
use crate::error::ValidationError;
use crate::models::{ColorReport, ColorSuggestionSet, RgbColor};
use crate::services::tone::classify_tone;

/// Derives the complementary and two analogous colors of `base`.
///
/// # Examples
///
/// ```
/// use paintcalc::models::RgbColor;
/// use paintcalc::services::derive_suggestions;
///
/// let set = derive_suggestions(RgbColor::new(100, 150, 200));
/// assert_eq!(set.complementary, RgbColor::new(155, 105, 55));
/// assert_eq!(set.analogous[0], RgbColor::new(130, 150, 170));
/// assert_eq!(set.analogous[1], RgbColor::new(70, 180, 200));
/// ```
#[must_use]
pub fn derive_suggestions(base: RgbColor) -> ColorSuggestionSet {
    let shift = i16::from(ANALOGOUS_SHIFT);

    ColorSuggestionSet {
        base,
        complementary: base.inverted(),
        analogous: [base.shifted(shift, 0, -shift), base.shifted(-shift, shift, 0)],
    }
}

/// Parses `hex` and derives its suggestions.
pub fn derive_suggestions_from_hex(hex: &str) -> Result<ColorSuggestionSet, ValidationError> {
    RgbColor::from_hex(hex).map(derive_suggestions)
}

/// Builds the full visualizer report for a color.
#[must_use]
pub fn describe_color(color: RgbColor) -> ColorReport {
    let tone = classify_tone(color);

    ColorReport {
        hex: color.to_hex(),
        r: color.r,
        g: color.g,
        b: color.b,
        brightness: color.brightness(),
        tone,
        suitability: tone.suitability().to_string(),
        suggestions: derive_suggestions(color),
    }
}
