//! PaintCalc Web Server Binary
//!
//! This binary starts the PaintCalc REST API used by the site's paint
//! calculator page.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured address (127.0.0.1:3001 by default)
//! paintcalc-web
//!
//! # Override the address and pricing file
//! paintcalc-web --port 8080 --config ./pricing.toml
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paintcalc::config::Config;
use paintcalc::web;

/// PaintCalc Web Server - REST API for the paint calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to the configured server port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to the configured server host)
    #[arg(long)]
    host: Option<String>,

    /// Pricing file to use instead of the default config.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration:
    // 1. Use --config if provided
    // 2. Otherwise, Config::config_dir()/config.toml (defaults if absent)
    let config = match &args.config {
        Some(path) => {
            info!("Using pricing file: {}", path.display());
            Config::load_from(path)
                .with_context(|| format!("Failed to load pricing file: {}", path.display()))?
        }
        None => Config::load()?,
    };

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid listen address: {host}:{port}"))?;

    web::run_server(config, addr).await
}
