mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "docuchain host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let addr = config.addr();
    tracing::info!(site_root = %config.leptos.site_root, gzip = config.gzip, "configuration loaded");

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "docuchain listening");
    axum::serve(listener, app).await?;
    Ok(())
}
