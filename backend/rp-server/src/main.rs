use rp_server::error::ServerError;
use rp_server::{AppState, build_router, logger};

use rp_auth::LiveKitTokenSigner;
use rp_store::SupabaseProfileStore;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = rp_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = rp_config::Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Profile store
    let store_url = config
        .store
        .url
        .as_deref()
        .ok_or_else(|| ServerError::missing_setting("store.url"))?;
    let store_key = config
        .store
        .api_key
        .as_deref()
        .ok_or_else(|| ServerError::missing_setting("store.api_key"))?;
    let store = SupabaseProfileStore::new(
        store_url,
        store_key,
        &config.store.table,
        Duration::from_secs(config.store.timeout_secs),
    )?;

    // Token signer
    let signer = LiveKitTokenSigner::new(
        config.livekit.api_key.clone(),
        config.livekit.api_secret.clone(),
        Duration::from_secs(config.livekit.token_ttl_secs),
    );

    let app = build_router(AppState::new(Arc::new(store), Arc::new(signer)));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Backend server listening at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
