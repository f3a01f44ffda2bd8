//! Application-wide constants.
//!
//! This module defines the application name plus the default measurement
//! constants used to seed the pricing table.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PaintCalc";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "PAINTCALC_CONFIG_DIR";

/// Area of a standard door in square feet (3 ft x 7 ft).
pub const DEFAULT_DOOR_AREA_SQFT: f64 = 21.0;

/// Area of a standard window in square feet (3 ft x 5 ft).
pub const DEFAULT_WINDOW_AREA_SQFT: f64 = 15.0;

/// Liters in one gallon, as used for the gallon estimate.
pub const DEFAULT_LITERS_PER_GALLON: f64 = 3.78;

/// Price per liter for every room except bathrooms.
pub const STANDARD_COST_PER_LITER: u32 = 350;

/// Price per liter of bathroom-grade paint.
pub const PREMIUM_COST_PER_LITER: u32 = 450;

/// Currency symbol printed in front of cost estimates.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Channel offset applied when deriving analogous colors.
pub const ANALOGOUS_SHIFT: u8 = 30;

/// Brightness above which a color is classified as light.
pub const LIGHT_BRIGHTNESS_THRESHOLD: f64 = 200.0;

/// Brightness below which a color without a dominant channel is bold.
pub const BOLD_BRIGHTNESS_THRESHOLD: f64 = 100.0;

/// Maximum number of coats the estimator accepts.
pub const MAX_COATS: u32 = 3;

/// Largest magnitude any estimate figure may reach (2^53 - 1).
///
/// Every whole number up to this bound is exact in an `f64` and in JSON
/// clients that read numbers as doubles.
pub const MAX_ESTIMATE_VALUE: i64 = (1 << 53) - 1;
