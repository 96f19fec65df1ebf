//! `cattery` — the cats and owners server binary.
//!
//! Usage:
//!   cattery [--listen <addr>] [--db <path> | --in-memory] [--log-level <level>] [--log-dir <dir>]

use anyhow::Context;
use cattery_server::{build_router, AppState, ServerConfig};
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let log_dir = config
        .resolve_log_dir()
        .context("failed to resolve log directory")?;
    cattery_core::init_logging(&config.log_level, &log_dir.to_string_lossy())
        .map_err(anyhow::Error::msg)?;

    let repo = config
        .open_repository()
        .context("failed to open cat repository")?;
    let app = build_router(AppState::new(repo));

    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    info!(
        "event=http_listen module=server status=ok addr={} in_memory={}",
        config.listen, config.in_memory
    );
    axum::serve(listener, app).await?;

    Ok(())
}
