use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use blog_posts::{ config::logging::init_logging, initialize_app, Config };

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let config = Config::new().context("Failed to load configuration")?;

    // Pool setup and migrations are blocking diesel calls
    let startup_config = config.clone();
    let app = tokio::task
        ::spawn_blocking(move || initialize_app(&startup_config)).await?
        .context("Failed to initialize the application")?
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server.addr();
    let listener = tokio::net::TcpListener
        ::bind(addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
