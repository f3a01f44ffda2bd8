//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the pricing table and
//! server settings in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_NAME, CONFIG_DIR_ENV, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DOOR_AREA_SQFT,
    DEFAULT_LITERS_PER_GALLON, DEFAULT_WINDOW_AREA_SQFT, PREMIUM_COST_PER_LITER,
    STANDARD_COST_PER_LITER,
};
use crate::models::RoomType;

/// Coverage and price for one room type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomRates {
    /// Square feet one liter covers
    pub coverage_per_liter: f64,
    /// Price of one liter in whole currency units
    pub cost_per_liter: u32,
}

impl RoomRates {
    /// Creates a new rate entry.
    #[must_use]
    pub const fn new(coverage_per_liter: f64, cost_per_liter: u32) -> Self {
        Self {
            coverage_per_liter,
            cost_per_liter,
        }
    }
}

/// Per-room rates keyed by room type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomRateTable {
    /// Living room rates
    pub living_room: RoomRates,
    /// Kitchen rates (kitchens need more paint per square foot)
    pub kitchen: RoomRates,
    /// Bedroom rates
    pub bedroom: RoomRates,
    /// Bathroom rates (premium moisture-resistant paint)
    pub bathroom: RoomRates,
}

impl Default for RoomRateTable {
    fn default() -> Self {
        Self {
            living_room: RoomRates::new(120.0, STANDARD_COST_PER_LITER),
            kitchen: RoomRates::new(110.0, STANDARD_COST_PER_LITER),
            bedroom: RoomRates::new(125.0, STANDARD_COST_PER_LITER),
            bathroom: RoomRates::new(100.0, PREMIUM_COST_PER_LITER),
        }
    }
}

impl RoomRateTable {
    /// Returns the rates for a room type.
    #[must_use]
    pub const fn get(&self, room_type: RoomType) -> &RoomRates {
        match room_type {
            RoomType::LivingRoom => &self.living_room,
            RoomType::Kitchen => &self.kitchen,
            RoomType::Bedroom => &self.bedroom,
            RoomType::Bathroom => &self.bathroom,
        }
    }

    /// Returns the rates for a room type mutably.
    pub fn get_mut(&mut self, room_type: RoomType) -> &mut RoomRates {
        match room_type {
            RoomType::LivingRoom => &mut self.living_room,
            RoomType::Kitchen => &mut self.kitchen,
            RoomType::Bedroom => &mut self.bedroom,
            RoomType::Bathroom => &mut self.bathroom,
        }
    }
}

/// Measurement constants and per-room prices used by the estimator.
///
/// Every figure can be overridden in `config.toml`, so per-market pricing
/// needs no code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    /// Area subtracted per door (sq ft)
    pub door_area_sqft: f64,
    /// Area subtracted per window (sq ft)
    pub window_area_sqft: f64,
    /// Liters per gallon for the gallon estimate
    pub liters_per_gallon: f64,
    /// Symbol printed before costs
    pub currency_symbol: String,
    /// Coverage and price per room type
    pub rooms: RoomRateTable,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            door_area_sqft: DEFAULT_DOOR_AREA_SQFT,
            window_area_sqft: DEFAULT_WINDOW_AREA_SQFT,
            liters_per_gallon: DEFAULT_LITERS_PER_GALLON,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            rooms: RoomRateTable::default(),
        }
    }
}

impl PricingTable {
    /// Returns the rates for a room type.
    #[must_use]
    pub const fn rates(&self, room_type: RoomType) -> &RoomRates {
        self.rooms.get(room_type)
    }

    /// Validates the table.
    ///
    /// Checks:
    /// - door and window areas are finite and not negative
    /// - liters per gallon is finite and positive
    /// - every room's coverage is finite and positive
    pub fn validate(&self) -> Result<()> {
        if !self.door_area_sqft.is_finite() || self.door_area_sqft < 0.0 {
            anyhow::bail!(
                "door_area_sqft must be a non-negative number, got {}",
                self.door_area_sqft
            );
        }
        if !self.window_area_sqft.is_finite() || self.window_area_sqft < 0.0 {
            anyhow::bail!(
                "window_area_sqft must be a non-negative number, got {}",
                self.window_area_sqft
            );
        }
        if !self.liters_per_gallon.is_finite() || self.liters_per_gallon <= 0.0 {
            anyhow::bail!(
                "liters_per_gallon must be a positive number, got {}",
                self.liters_per_gallon
            );
        }

        for room_type in RoomType::ALL {
            let coverage = self.rates(room_type).coverage_per_liter;
            if !coverage.is_finite() || coverage <= 0.0 {
                anyhow::bail!(
                    "coverage_per_liter for {} must be a positive number, got {}",
                    room_type,
                    coverage
                );
            }
        }

        Ok(())
    }
}

/// Settings for the REST server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PaintCalc/config.toml`
/// - macOS: `~/Library/Application Support/PaintCalc/config.toml`
/// - Windows: `%APPDATA%\PaintCalc\config.toml`
///
/// The directory can be overridden with the `PAINTCALC_CONFIG_DIR`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pricing table used by the estimator
    pub pricing: PricingTable,
    /// REST server settings
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to the given path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.pricing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_rates() {
        let pricing = PricingTable::default();
        assert_eq!(pricing.rates(RoomType::LivingRoom), &RoomRates::new(120.0, 350));
        assert_eq!(pricing.rates(RoomType::Kitchen), &RoomRates::new(110.0, 350));
        assert_eq!(pricing.rates(RoomType::Bedroom), &RoomRates::new(125.0, 350));
        assert_eq!(pricing.rates(RoomType::Bathroom), &RoomRates::new(100.0, 450));
        assert!(pricing.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_coverage() {
        let mut pricing = PricingTable::default();
        pricing.rooms.get_mut(RoomType::Kitchen).coverage_per_liter = 0.0;
        let err = pricing.validate().unwrap_err();
        assert!(err.to_string().contains("kitchen"));
    }

    #[test]
    fn test_validate_rejects_negative_areas() {
        let pricing = PricingTable {
            window_area_sqft: -1.0,
            ..PricingTable::default()
        };
        assert!(pricing.validate().is_err());

        let pricing = PricingTable {
            liters_per_gallon: 0.0,
            ..PricingTable::default()
        };
        assert!(pricing.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.pricing.rooms.bathroom.cost_per_liter = 500;
        config.server.port = 8080;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[pricing]\ndoor_area_sqft = 20.0\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.pricing.door_area_sqft, 20.0);
        assert_eq!(loaded.pricing.window_area_sqft, DEFAULT_WINDOW_AREA_SQFT);
        assert_eq!(loaded.pricing.rooms, RoomRateTable::default());
        assert_eq!(loaded.server, ServerConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[pricing.rooms.bedroom]\ncoverage_per_liter = -5.0\ncost_per_liter = 300\n",
        )
        .unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "pricing = [not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
