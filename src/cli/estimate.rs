//! Paint estimate command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliResult};
use crate::config::Config;
use crate::models::{CalculationResult, RoomSpecInput, RoomType};
use crate::services::PaintEstimator;

/// Estimate paint quantity and cost for a room
#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    /// Room length in feet
    #[arg(short, long, value_name = "FEET", allow_negative_numbers = true)]
    pub length: Option<String>,

    /// Room width in feet
    #[arg(short, long, value_name = "FEET", allow_negative_numbers = true)]
    pub width: Option<String>,

    /// Wall height in feet
    #[arg(long, value_name = "FEET", allow_negative_numbers = true)]
    pub height: Option<String>,

    /// Number of doors [default: 1]
    #[arg(long, value_name = "N")]
    pub doors: Option<String>,

    /// Number of windows [default: 2]
    #[arg(long, value_name = "N")]
    pub windows: Option<String>,

    /// Number of coats, 1-3 [default: 2]
    #[arg(long, value_name = "N")]
    pub coats: Option<String>,

    /// Room type (living-room, kitchen, bedroom, bathroom)
    #[arg(short, long, value_name = "TYPE", default_value = "livingRoom")]
    pub room: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of the estimate command.
#[derive(Debug, Serialize)]
struct EstimateOutput<'a> {
    room_type: RoomType,
    room_name: &'static str,
    currency_symbol: &'a str,
    #[serde(flatten)]
    result: CalculationResult,
}

impl EstimateArgs {
    /// Execute the estimate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let room_type: RoomType = self.room.parse()?;

        let input = RoomSpecInput {
            length: self.length.as_deref().map(Into::into),
            width: self.width.as_deref().map(Into::into),
            height: self.height.as_deref().map(Into::into),
            doors: self.doors.as_deref().map(Into::into),
            windows: self.windows.as_deref().map(Into::into),
            coats: self.coats.as_deref().map(Into::into),
        };
        let room = input.parse()?;

        let estimator = PaintEstimator::new(config.pricing.clone());
        let result = estimator.estimate(&room, room_type)?;
        let currency = config.pricing.currency_symbol.as_str();

        if self.json {
            return print_json(&EstimateOutput {
                room_type,
                room_name: room_type.display_name(),
                currency_symbol: currency,
                result,
            });
        }

        println!(
            "Paint estimate for {} ({} x {} x {} ft, {} door(s), {} window(s), {} coat(s))",
            room_type.display_name(),
            room.length_ft,
            room.width_ft,
            room.height_ft,
            room.door_count,
            room.window_count,
            room.coats
        );
        println!();
        println!("  Wall area:       {} sq ft", result.wall_area);
        println!("  Doors/windows:   -{} / -{} sq ft", result.door_area, result.window_area);
        println!("  Paintable area:  {} sq ft", result.paintable_area);
        println!("  Total area:      {} sq ft", result.total_area);
        println!(
            "  Paint needed:    {} L ({} gal) at {} sq ft/L",
            result.liters_needed, result.gallons_needed, result.coverage_per_liter
        );
        println!(
            "  Estimated cost:  {}{} ({}{}/L)",
            currency, result.estimated_cost, currency, result.cost_per_liter
        );

        if result.paintable_area < 0 {
            println!();
            println!("⚠ Doors and windows exceed the wall area; check the room dimensions.");
        }

        Ok(())
    }
}
