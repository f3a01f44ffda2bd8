//! Data models for rooms, colors and estimates.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod estimate;
pub mod palette;
pub mod rgb;
pub mod room;
pub mod suggestion;

// Re-export all model types
pub use estimate::CalculationResult;
pub use palette::CURATED_PALETTE;
pub use rgb::RgbColor;
pub use room::{NumericInput, RoomSpec, RoomSpecInput, RoomType};
pub use suggestion::{ColorReport, ColorSuggestionSet, Tone};
