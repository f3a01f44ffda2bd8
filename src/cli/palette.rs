//! Curated palette listing and random pick.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliResult};
use crate::models::palette::random_color;
use crate::models::{RgbColor, Tone, CURATED_PALETTE};
use crate::services::classify_tone;

/// List featured paint colors or pick one at random
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Print a single randomly chosen color
    #[arg(long)]
    pub random: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Swatch {
    color: RgbColor,
    tone: Tone,
}

impl From<RgbColor> for Swatch {
    fn from(color: RgbColor) -> Self {
        Self {
            color,
            tone: classify_tone(color),
        }
    }
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        if self.random {
            let swatch = Swatch::from(random_color());
            if self.json {
                return print_json(&swatch);
            }
            println!("{} ({})", swatch.color, swatch.tone);
            return Ok(());
        }

        let swatches: Vec<Swatch> = CURATED_PALETTE.iter().copied().map(Swatch::from).collect();
        if self.json {
            return print_json(&swatches);
        }

        for swatch in &swatches {
            println!("{}  {}", swatch.color, swatch.tone);
        }
        Ok(())
    }
}
