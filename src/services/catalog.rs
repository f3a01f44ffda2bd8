//! Room catalog with the rates currently in effect.

use serde::Serialize;

use crate::config::PricingTable;
use crate::models::RoomType;

/// One room type with the rates the estimator will use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomInfo {
    /// Wire identifier
    pub id: RoomType,
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Square feet one liter covers
    pub coverage_per_liter: f64,
    /// Price per liter
    pub cost_per_liter: u32,
}

/// Builds the room catalog from a pricing table.
#[must_use]
pub fn room_catalog(pricing: &PricingTable) -> Vec<RoomInfo> {
    RoomType::ALL
        .iter()
        .map(|&room_type| {
            let rates = pricing.rates(room_type);
            RoomInfo {
                id: room_type,
                name: room_type.display_name(),
                description: room_type.description(),
                coverage_per_liter: rates.coverage_per_liter,
                cost_per_liter: rates.cost_per_liter,
            }
        })
        .collect()
}
