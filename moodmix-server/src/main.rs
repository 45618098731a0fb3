//! moodmix-server - mood/genre playlist microservice
//!
//! Startup order:
//! 1. `.env` and tracing init
//! 2. Bootstrap TOML (CLI → MOODMIX_CONFIG → platform dir → defaults)
//! 3. API key (GROQ_API_KEY → TOML); no key means catalog-only mode
//! 4. Bind and serve

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use moodmix_common::config::{resolve_api_key, ConfigResolver, CONFIG_ENV_VAR};
use moodmix_server::services::{GroqClient, PlaylistGenerator};
use moodmix_server::{bind_listener, build_router, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "moodmix-server", version, about = "Mood/genre playlist service")]
struct Args {
    /// Path to moodmix.toml
    #[arg(long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Interface to bind (overrides TOML)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides TOML)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is normal outside development
    dotenv::dotenv().ok();

    let args = Args::parse();

    // Config is needed for the log level, so it is loaded before tracing init.
    // Where it came from (or why it failed) is logged after.
    let loaded = ConfigResolver::new(args.config.clone()).load();
    let level = loaded
        .as_ref()
        .map(|l| l.config.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .init();

    info!(
        "Starting moodmix-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let loaded = loaded.context("Failed to load configuration")?;
    loaded.source.log();
    let config = loaded.config;

    let generator: Option<Arc<dyn PlaylistGenerator>> = match resolve_api_key(&config.generator) {
        Some(api_key) => {
            info!("Generation API key loaded: yes (model {})", config.generator.model);
            let client: Arc<dyn PlaylistGenerator> = Arc::new(
                GroqClient::new(&config.generator, api_key)
                    .context("Failed to build generation client")?,
            );
            Some(client)
        }
        None => {
            warn!("Generation API key loaded: no - serving curated playlists only");
            None
        }
    };

    let app = build_router(AppState::new(generator));

    let host = args.host.unwrap_or(config.host);
    let port = args.port.unwrap_or(config.port);
    let (listener, addr) = bind_listener(&host, port).await?;
    info!("moodmix-server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
