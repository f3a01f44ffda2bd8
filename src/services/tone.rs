//! Tone classification from brightness and channel dominance.

use crate::constants::{BOLD_BRIGHTNESS_THRESHOLD, LIGHT_BRIGHTNESS_THRESHOLD};
use crate::models::{RgbColor, Tone};

/// Buckets a color into a [`Tone`].
///
/// Checks run in a fixed order and the first match wins:
/// brightness above 200 is light, then a strictly dominant red channel is
/// warm, a strictly dominant blue channel is cool, brightness below 100 is
/// bold, and anything left is neutral.
///
/// # Examples
///
/// ```
/// use paintcalc::models::{RgbColor, Tone};
/// use paintcalc::services::classify_tone;
///
/// assert_eq!(classify_tone(RgbColor::WHITE), Tone::Light);
/// assert_eq!(classify_tone(RgbColor::new(200, 40, 40)), Tone::Warm);
/// ```
#[must_use]
pub fn classify_tone(color: RgbColor) -> Tone {
    let brightness = color.brightness();
    let RgbColor { r, g, b } = color;

    if brightness > LIGHT_BRIGHTNESS_THRESHOLD {
        Tone::Light
    } else if r > g && r > b {
        Tone::Warm
    } else if b > r && b > g {
        Tone::Cool
    } else if brightness < BOLD_BRIGHTNESS_THRESHOLD {
        Tone::Bold
    } else {
        Tone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_light() {
        assert_eq!(classify_tone(RgbColor::WHITE), Tone::Light);
    }

    #[test]
    fn test_brightness_checked_before_dominance() {
        // Red-dominant but bright: 0.299*255 + 0.587*230 + 0.114*220 = 236.4
        assert_eq!(classify_tone(RgbColor::new(255, 230, 220)), Tone::Light);
    }

    #[test]
    fn test_warm_and_cool() {
        assert_eq!(classify_tone(RgbColor::new(255, 0, 0)), Tone::Warm);
        assert_eq!(classify_tone(RgbColor::new(0, 0, 255)), Tone::Cool);
        assert_eq!(classify_tone(RgbColor::new(69, 183, 209)), Tone::Cool);
    }

    #[test]
    fn test_ties_are_not_dominant() {
        // Red and blue tie: neither warm nor cool, brightness 62 -> bold
        assert_eq!(classify_tone(RgbColor::new(150, 0, 150)), Tone::Bold);
        // Red and green tie above 100 brightness -> neutral
        assert_eq!(classify_tone(RgbColor::new(180, 180, 20)), Tone::Neutral);
    }

    #[test]
    fn test_bold_and_neutral() {
        assert_eq!(classify_tone(RgbColor::BLACK), Tone::Bold);
        assert_eq!(classify_tone(RgbColor::new(0, 100, 0)), Tone::Bold);
        assert_eq!(classify_tone(RgbColor::new(128, 128, 128)), Tone::Neutral);
        assert_eq!(classify_tone(RgbColor::new(0, 200, 0)), Tone::Neutral);
    }

    #[test]
    fn test_light_threshold() {
        // Gray just under the threshold has no dominant channel
        assert_eq!(classify_tone(RgbColor::new(199, 199, 199)), Tone::Neutral);
        assert_eq!(classify_tone(RgbColor::new(201, 201, 201)), Tone::Light);
    }
}
