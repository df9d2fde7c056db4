use anyhow::{Context, Result};
use clap::Parser;
use poster_server::{AppState, ServerConfig, app};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poster-server", about = "HTTP front-end for poster tiling", version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file and POSTER_SERVER_BIND
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    }
    .with_env_overrides();
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    log::info!(
        "Listening on {} ({} DPI, upload limit {} bytes)",
        listener.local_addr()?,
        config.poster.dpi,
        config.max_upload_bytes
    );

    let router = app(AppState::new(config.poster), config.max_upload_bytes);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
