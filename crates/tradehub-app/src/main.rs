//! Tradehub session bootstrap - entry point.
//!
//! Exchanges URL-embedded login tokens for session state over the WebSocket
//! API, persists the result, and reports the header render state.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Tradehub session bootstrap
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via TRADEHUB_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Page URL to bootstrap from, including login query parameters
    url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize TLS crypto provider (must be before any WS connections)
    tradehub_ws::init_crypto();

    let args = Args::parse();

    tradehub_app::logging::init_logging();

    info!("Starting tradehub v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > TRADEHUB_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("TRADEHUB_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = tradehub_app::AppConfig::from_file(&config_path)?;
    info!(app_id = config.api.app_id, server_url = %config.api.server_url, "Configuration loaded");

    let app = tradehub_app::Application::new(config)?;
    app.run(&args.url).await?;

    Ok(())
}
