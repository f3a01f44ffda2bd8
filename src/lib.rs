//! PaintCalc Library
//!
//! This library provides the paint requirement calculator: wall-area and
//! paint-volume estimation with per-room pricing, complementary and
//! analogous color suggestions, and tone classification, plus the CLI and
//! REST front ends built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
#[cfg(feature = "web")]
pub mod web;

pub use error::ValidationError;
