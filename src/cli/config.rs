//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::RoomType;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Room type whose rates to change (requires --coverage and/or --cost)
    #[arg(long, value_name = "TYPE")]
    room: Option<String>,

    /// Coverage in square feet per liter for --room
    #[arg(long, value_name = "SQFT", requires = "room")]
    coverage: Option<f64>,

    /// Price per liter for --room
    #[arg(long, value_name = "AMOUNT", requires = "room")]
    cost: Option<u32>,

    /// Area subtracted per door, in square feet
    #[arg(long, value_name = "SQFT")]
    door_area: Option<f64>,

    /// Area subtracted per window, in square feet
    #[arg(long, value_name = "SQFT")]
    window_area: Option<f64>,

    /// Liters per gallon
    #[arg(long, value_name = "LITERS")]
    liters_per_gallon: Option<f64>,

    /// Currency symbol printed before costs
    #[arg(long, value_name = "SYMBOL")]
    currency: Option<String>,

    /// REST server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(path),
            ConfigCommand::Path => {
                println!("{}", config_path(path)?.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(path),
        }
    }
}

fn config_path(path: Option<&Path>) -> CliResult<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}"))),
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        let config = crate::cli::common::load_config(path)?;

        if self.json {
            return print_json(&config);
        }

        output_human_readable(&config);
        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.room.is_none()
            && self.door_area.is_none()
            && self.window_area.is_none()
            && self.liters_per_gallon.is_none()
            && self.currency.is_none()
            && self.port.is_none()
    }

    /// Execute set command
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --room, --door-area, --window-area, --liters-per-gallon, --currency, or --port",
            ));
        }

        let path = config_path(path)?;
        let mut config = if path.exists() {
            Config::load_from(&path)
                .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?
        } else {
            Config::default()
        };

        if let Some(room) = &self.room {
            let room_type: RoomType = room.parse()?;
            if self.coverage.is_none() && self.cost.is_none() {
                return Err(CliError::validation(
                    "--room requires --coverage and/or --cost",
                ));
            }

            let rates = config.pricing.rooms.get_mut(room_type);
            if let Some(coverage) = self.coverage {
                rates.coverage_per_liter = coverage;
            }
            if let Some(cost) = self.cost {
                rates.cost_per_liter = cost;
            }
        }

        if let Some(door_area) = self.door_area {
            config.pricing.door_area_sqft = door_area;
        }
        if let Some(window_area) = self.window_area {
            config.pricing.window_area_sqft = window_area;
        }
        if let Some(liters) = self.liters_per_gallon {
            config.pricing.liters_per_gallon = liters;
        }
        if let Some(currency) = &self.currency {
            config.pricing.currency_symbol.clone_from(currency);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let pricing = &config.pricing;

    println!("Pricing:");
    println!("  Door area:          {} sq ft", pricing.door_area_sqft);
    println!("  Window area:        {} sq ft", pricing.window_area_sqft);
    println!("  Liters per gallon:  {}", pricing.liters_per_gallon);
    println!("  Currency:           {}", pricing.currency_symbol);
    println!();
    println!("Rooms:");
    for room_type in RoomType::ALL {
        let rates = pricing.rates(room_type);
        println!(
            "  {:<12} {} sq ft/L, {}{}/L",
            room_type.display_name(),
            rates.coverage_per_liter,
            pricing.currency_symbol,
            rates.cost_per_liter
        );
    }
    println!();
    println!("Server:");
    println!("  Address:            {}:{}", config.server.host, config.server.port);
}
