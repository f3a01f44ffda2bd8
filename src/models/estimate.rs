//! Paint estimate result.

use serde::{Deserialize, Serialize};

/// Areas, paint volume and cost computed for one room.
///
/// Areas are in square feet, rounded half-up at the output boundary.
/// They are signed: when doors and windows cover more than the walls,
/// the paintable area (and everything derived from it) goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Area of the four walls
    pub wall_area: i64,
    /// Area taken by doors
    pub door_area: i64,
    /// Area taken by windows
    pub window_area: i64,
    /// Wall area minus doors and windows
    pub paintable_area: i64,
    /// Paintable area multiplied by the number of coats
    pub total_area: i64,
    /// Liters of paint, rounded up
    pub liters_needed: i64,
    /// Gallons of paint, rounded up from the liter count
    pub gallons_needed: i64,
    /// Liters multiplied by the price per liter
    pub estimated_cost: i64,
    /// Coverage used for this room type (sq ft per liter)
    pub coverage_per_liter: f64,
    /// Price per liter used for this room type
    pub cost_per_liter: u32,
}
