//! PaintCalc - paint requirement estimator and color helper
//!
//! Estimates how much paint a room needs and what it will cost, and derives
//! complementary and analogous colors for a chosen shade.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paintcalc::cli::{
    common::load_config, CliResult, ConfigArgs, DescribeArgs, EstimateArgs, ExitCode,
    PaletteArgs, RoomsArgs, SuggestArgs, ToneArgs,
};

/// PaintCalc - paint requirement estimator and color helper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use this pricing file instead of the default config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate paint quantity and cost for a room
    Estimate(EstimateArgs),
    /// Show complementary and analogous colors
    Suggest(SuggestArgs),
    /// Classify a color's tone and show room advice
    Tone(ToneArgs),
    /// Show everything known about a color
    Describe(DescribeArgs),
    /// List room types with their coverage and price
    Rooms(RoomsArgs),
    /// List featured paint colors or pick one at random
    Palette(PaletteArgs),
    /// Configuration management commands
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Command::Estimate(args) => args.execute(&load_config(config_path)?),
        Command::Suggest(args) => args.execute(),
        Command::Tone(args) => args.execute(),
        Command::Describe(args) => args.execute(),
        Command::Rooms(args) => args.execute(&load_config(config_path)?),
        Command::Palette(args) => args.execute(),
        Command::Config(args) => args.execute(config_path),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(code = ?err.code, "Command failed");
        eprintln!("Error: {err}");
        std::process::exit(err.code.into());
    }

    std::process::exit(ExitCode::Success.into());
}
