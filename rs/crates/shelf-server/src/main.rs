mod assets;
mod config;
mod error;
mod library;
mod page;
mod server;
mod session;
mod view;

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;
use crate::library::Library;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[shelf] {}", e);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(config).await {
        error!("[shelf] {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let state = Arc::new(server::AppState::new(Library::new(), config.public_dir.clone()));
    let app = server::router(state.clone());

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    // Seed only once the port is ours.
    {
        let mut lib = state.library.write().await;
        lib.books.seed();
        info!("[library] seeded {} books", lib.books.len());
    }

    info!("[shelf] listening on port {}", config.port);
    info!("[shelf] static files from {}", config.public_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
