//! Color commands: suggestions, tone, and the full color report.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliResult};
use crate::models::{ColorSuggestionSet, RgbColor, Tone};
use crate::services::{classify_tone, derive_suggestions, describe_color};

/// Show complementary and analogous colors
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Base color as #RRGGBB
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Classify a color's tone and show room advice
#[derive(Debug, Clone, Args)]
pub struct ToneArgs {
    /// Color as #RRGGBB
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show everything known about a color
#[derive(Debug, Clone, Args)]
pub struct DescribeArgs {
    /// Color as #RRGGBB
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ToneOutput {
    color: RgbColor,
    brightness: f64,
    tone: Tone,
    suitability: &'static str,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self) -> CliResult<()> {
        let base = RgbColor::from_hex(&self.color)?;
        let set = derive_suggestions(base);

        if self.json {
            return print_json(&set);
        }

        print_suggestions(&set);
        Ok(())
    }
}

impl ToneArgs {
    /// Execute the tone command
    pub fn execute(&self) -> CliResult<()> {
        let color = RgbColor::from_hex(&self.color)?;
        let tone = classify_tone(color);
        let output = ToneOutput {
            color,
            brightness: color.brightness(),
            tone,
            suitability: tone.suitability(),
        };

        if self.json {
            return print_json(&output);
        }

        println!("{}: {} (brightness {:.1})", color, tone, output.brightness);
        println!("{}", tone.suitability());
        Ok(())
    }
}

impl DescribeArgs {
    /// Execute the describe command
    pub fn execute(&self) -> CliResult<()> {
        let report = describe_color(RgbColor::from_hex(&self.color)?);

        if self.json {
            return print_json(&report);
        }

        println!("{}", report.hex);
        println!("  RGB:         {}, {}, {}", report.r, report.g, report.b);
        println!("  Brightness:  {:.1}", report.brightness);
        println!("  Tone:        {}", report.tone);
        println!("  {}", report.suitability);
        println!();
        print_suggestions(&report.suggestions);
        Ok(())
    }
}

fn print_suggestions(set: &ColorSuggestionSet) {
    println!("Suggestions for {}:", set.base);
    println!("  Complementary: {}", set.complementary);
    println!("  Analogous:     {}  {}", set.analogous[0], set.analogous[1]);
}
