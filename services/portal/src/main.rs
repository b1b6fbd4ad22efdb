//! Portal CLI
//!
//! Command-line interface for the aligner marketing site and patient portal server.

use std::path::PathBuf;

use clap::Parser;
use leptos::prelude::get_configuration;
use portal::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Aligner marketing site and patient portal server")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Site root, pkg dir and output name come from cargo-leptos.
    let leptos_options = get_configuration(None)?.leptos_options;

    tracing::info!("Starting portal for {}", config.site.base_url);
    portal::run(config, leptos_options).await?;

    Ok(())
}
