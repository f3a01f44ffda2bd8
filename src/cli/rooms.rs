//! Room catalog listing.

use clap::Args;

use crate::cli::common::{print_json, CliResult};
use crate::config::Config;
use crate::services::room_catalog;

/// List room types with their coverage and price
#[derive(Debug, Clone, Args)]
pub struct RoomsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl RoomsArgs {
    /// Execute the rooms command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let rooms = room_catalog(&config.pricing);

        if self.json {
            return print_json(&rooms);
        }

        let currency = &config.pricing.currency_symbol;
        for room in &rooms {
            println!(
                "{:<12} {:<12} {:>6} sq ft/L  {}{}/L  {}",
                room.id.id(),
                room.name,
                room.coverage_per_liter,
                currency,
                room.cost_per_liter,
                room.description
            );
        }

        Ok(())
    }
}
