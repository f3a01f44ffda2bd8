//! Shared test fixtures for E2E CLI and web tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use paintcalc::config::{Config, PricingTable, RoomRates};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the paintcalc binary
pub fn paintcalc_bin() -> &'static str {
    env!("CARGO_BIN_EXE_paintcalc")
}

/// Creates a Command whose default config directory is `config_dir`.
///
/// Keeps tests away from the user's real `config.toml`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(paintcalc_bin());
    cmd.env("PAINTCALC_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the CLI against an isolated, empty config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Pricing table with round numbers that make expected figures easy to read.
pub fn test_pricing() -> PricingTable {
    let mut pricing = PricingTable::default();
    pricing.rooms.living_room = RoomRates::new(100.0, 200);
    pricing.rooms.kitchen = RoomRates::new(100.0, 300);
    pricing.rooms.bedroom = RoomRates::new(100.0, 400);
    pricing.rooms.bathroom = RoomRates::new(50.0, 500);
    pricing.door_area_sqft = 20.0;
    pricing.window_area_sqft = 10.0;
    pricing.liters_per_gallon = 4.0;
    pricing.currency_symbol = "$".to_string();
    pricing
}

/// Writes a config file using [`test_pricing`] into `dir` and returns its path.
pub fn write_test_config(dir: &Path) -> PathBuf {
    let config = Config {
        pricing: test_pricing(),
        ..Config::default()
    };
    let path = dir.join("pricing.toml");
    config.save_to(&path).expect("Failed to write test config");
    path
}

/// Parses stdout of a finished command as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("Invalid JSON ({e}): {stdout}"))
}
