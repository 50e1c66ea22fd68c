//! SocialAuto API Server
//!
//! Run with: cargo run --bin socialauto -- [--config PATH]
//!
//! Configuration is read from `--config`, or from the default locations
//! (see [`Config::load_default`]), with `SOCIALAUTO_*` environment overrides.
//! `RUST_LOG` overrides the configured log level.

use clap::Parser;
use std::path::PathBuf;

use socialauto::api::serve;
use socialauto::app::build_state;
use socialauto::config::Config;
use socialauto::logging::init_logging;

#[derive(Parser)]
#[command(name = "socialauto")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SocialAuto dashboard API server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    tracing::info!("Starting SocialAuto API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        backend = ?config.directory.backend,
        sessions = config.auth.sessions.len(),
        "Loaded configuration"
    );

    let state = build_state(&config).await?;

    tracing::info!("Starting server on {}:{}", config.api.host, config.api.port);
    serve(state, &config.api).await?;

    tracing::info!("SocialAuto API server stopped");
    Ok(())
}
