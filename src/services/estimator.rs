//! Paint quantity and cost estimation.
//!
//! Walls are modelled as the room perimeter times its height; ceiling and
//! floor are not painted. Standard door and window areas come from the
//! pricing table and are subtracted without clamping, so a room with more
//! openings than wall yields a negative paintable area that flows through
//! every derived figure.

use crate::config::PricingTable;
use crate::constants::MAX_ESTIMATE_VALUE;
use crate::error::ValidationError;
use crate::models::{CalculationResult, RoomSpec, RoomType};

/// Estimator bound to a pricing table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintEstimator {
    pricing: PricingTable,
}

impl PaintEstimator {
    /// Creates an estimator using the given pricing table.
    #[must_use]
    pub fn new(pricing: PricingTable) -> Self {
        Self { pricing }
    }

    /// Returns the pricing table in use.
    #[must_use]
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Computes areas, paint volume and cost for a room.
    ///
    /// # Examples
    ///
    /// ```
    /// use paintcalc::models::{RoomSpec, RoomType};
    /// use paintcalc::services::PaintEstimator;
    ///
    /// let room = RoomSpec::new(10.0, 10.0, 10.0, 1, 2, 2).unwrap();
    /// let result = PaintEstimator::default()
    ///     .estimate(&room, RoomType::LivingRoom)
    ///     .unwrap();
    /// assert_eq!(result.paintable_area, 349);
    /// assert_eq!(result.liters_needed, 6);
    /// assert_eq!(result.estimated_cost, 2100);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a dimension is not a positive
    /// number, the coat count is out of range, or the room is so large that
    /// a figure exceeds [`MAX_ESTIMATE_VALUE`].
    pub fn estimate(
        &self,
        room: &RoomSpec,
        room_type: RoomType,
    ) -> Result<CalculationResult, ValidationError> {
        room.validate()?;

        let rates = self.pricing.rates(room_type);

        let wall_area = 2.0 * (room.length_ft * room.height_ft + room.width_ft * room.height_ft);
        let door_area = f64::from(room.door_count) * self.pricing.door_area_sqft;
        let window_area = f64::from(room.window_count) * self.pricing.window_area_sqft;

        let paintable_area = wall_area - door_area - window_area;
        let total_area = paintable_area * f64::from(room.coats);

        let liters_needed = (total_area / rates.coverage_per_liter).ceil();
        let gallons_needed = (liters_needed / self.pricing.liters_per_gallon).ceil();

        tracing::debug!(
            room_type = %room_type,
            wall_area,
            paintable_area,
            total_area,
            liters_needed,
            "Computed paint estimate"
        );

        let wall_area = whole("wall_area", wall_area)?;
        let door_area = whole("door_area", door_area)?;
        let window_area = whole("window_area", window_area)?;
        let paintable_area = whole("paintable_area", paintable_area)?;
        let total_area = whole("total_area", total_area)?;
        let liters_needed = whole("liters_needed", liters_needed)?;
        let gallons_needed = whole("gallons_needed", gallons_needed)?;
        let estimated_cost = liters_needed
            .checked_mul(i64::from(rates.cost_per_liter))
            .filter(|cost| cost.unsigned_abs() <= MAX_ESTIMATE_VALUE.unsigned_abs())
            .ok_or(ValidationError::EstimateOutOfRange {
                field: "estimated_cost",
            })?;

        Ok(CalculationResult {
            wall_area,
            door_area,
            window_area,
            paintable_area,
            total_area,
            liters_needed,
            gallons_needed,
            estimated_cost,
            coverage_per_liter: rates.coverage_per_liter,
            cost_per_liter: rates.cost_per_liter,
        })
    }
}

/// Estimates with the default pricing table.
pub fn estimate(room: &RoomSpec, room_type: RoomType) -> Result<CalculationResult, ValidationError> {
    PaintEstimator::default().estimate(room, room_type)
}

/// Rounds to the nearest integer with halves going toward positive infinity
/// (2.5 -> 3, -2.5 -> -2), unlike `f64::round` which rounds away from zero.
///
/// Compares against the floor instead of adding 0.5 first, which would
/// round 0.49999999999999994 up and bump odd integers above 2^52.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds a figure and converts it to an integer, rejecting anything past
/// [`MAX_ESTIMATE_VALUE`] (including infinities from overflowing products).
fn whole(field: &'static str, value: f64) -> Result<i64, ValidationError> {
    let rounded = round_half_up(value);
    if rounded.is_finite() && rounded.abs() <= MAX_ESTIMATE_VALUE as f64 {
        Ok(rounded as i64)
    } else {
        Err(ValidationError::EstimateOutOfRange { field })
    }
}
