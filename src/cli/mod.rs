//! CLI command handlers for PaintCalc.
//!
//! This module provides headless, scriptable access to the calculator for
//! automation and shell use. Commands that print results accept `--json`.

pub mod color;
pub mod common;
pub mod config;
pub mod estimate;
pub mod palette;
pub mod rooms;

// Re-export types used by main.rs and tests
pub use color::{DescribeArgs, SuggestArgs, ToneArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use estimate::EstimateArgs;
pub use palette::PaletteArgs;
pub use rooms::RoomsArgs;
