use anyhow::Context;
use clap::Parser;
use cloth_similarity::catalog::loader::load_catalog;
use cloth_similarity::config::Config;
use cloth_similarity::search::engine::Recommender;
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    tracing::info!("Starting with {:?}", config);

    // 1. Catalog:
    let catalog = load_catalog(&config.catalog).inspect_err(|e| tracing::error!("{}", e))?;

    // 2. Vector space:
    let default_top_n = usize::try_from(config.default_top_n)
        .context("default top_n does not fit in usize")?;
    let recommender = Recommender::new(catalog, default_top_n)
        .inspect_err(|e| tracing::error!("{}", e))?;

    // 3. HTTP server:
    let app = cloth_similarity::router(Arc::new(recommender));

    tracing::info!("HTTP server listening on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("cannot bind {}", config.bind))?;
    axum::serve(listener, app).await?;

    Ok(())
}
