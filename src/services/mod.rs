//! Service layer for business logic.
//!
//! This module contains the calculator proper: paint estimation, color
//! suggestions and tone classification. Everything here is pure and
//! synchronous.

pub mod catalog;
pub mod color_theory;
pub mod estimator;
pub mod tone;

// Re-export commonly used types and functions
pub use catalog::{room_catalog, RoomInfo};
pub use color_theory::{derive_suggestions, derive_suggestions_from_hex, describe_color};
pub use estimator::{estimate, PaintEstimator};
pub use tone::classify_tone;
