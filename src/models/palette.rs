//! Curated palette of featured paint colors.
//!
//! These are the swatches offered by the "random color" button. The list
//! carries one duplicate (`#85C1E9`), so a uniform pick favors that shade.

use rand::seq::IndexedRandom;

use super::RgbColor;

/// Featured paint colors in display order.
pub const CURATED_PALETTE: [RgbColor; 15] = [
    RgbColor::new(0xFF, 0x6B, 0x6B),
    RgbColor::new(0x4E, 0xCD, 0xC4),
    RgbColor::new(0x45, 0xB7, 0xD1),
    RgbColor::new(0x96, 0xCE, 0xB4),
    RgbColor::new(0xFF, 0xEA, 0xA7),
    RgbColor::new(0xDD, 0xA0, 0xDD),
    RgbColor::new(0x98, 0xD8, 0xC8),
    RgbColor::new(0xF7, 0xDC, 0x6F),
    RgbColor::new(0xBB, 0x8F, 0xCE),
    RgbColor::new(0x85, 0xC1, 0xE9),
    RgbColor::new(0xF8, 0xC4, 0x71),
    RgbColor::new(0x82, 0xE0, 0xAA),
    RgbColor::new(0xF1, 0x94, 0x8A),
    RgbColor::new(0x85, 0xC1, 0xE9),
    RgbColor::new(0xD7, 0xBD, 0xE2),
];

/// Picks a featured color uniformly at random.
#[must_use]
pub fn random_color() -> RgbColor {
    random_color_with(&mut rand::rng())
}

/// Picks a featured color using the given random source.
pub fn random_color_with<R: rand::Rng + ?Sized>(rng: &mut R) -> RgbColor {
    CURATED_PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(RgbColor::WHITE)
}
