//! Courtside server - HTTP API binary
//!
//! Wires the lookup pipeline to its production backends (Postgres store,
//! in-memory cache, Google Places provider) and serves it over HTTP.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use courtside::cache::MemoryCacheProvider;
use courtside::provider::{PlacesProvider, ReqwestClient};
use courtside::store::PostgresPoiStore;
use courtside::telemetry::LookupMetrics;
use courtside::{LookupConfig, LookupOrchestrator};

/// Nearby tennis court lookup service.
#[derive(Parser, Debug)]
#[command(name = "courtside", version, about)]
struct Args {
    /// Address to bind the HTTP listener to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Google Maps Platform API key.
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Maximum response cache size in bytes.
    #[arg(long, default_value_t = 64 * 1024 * 1024)]
    cache_size: u64,

    /// Maximum database connections.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration is resolved once here and injected; nothing downstream
    // reads the environment.
    let config = LookupConfig::new(args.api_key);

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .connect(&args.database_url)
        .await?;
    info!("Connected to database");

    let store = Arc::new(PostgresPoiStore::new(pool));
    let cache = Arc::new(MemoryCacheProvider::new(
        args.cache_size,
        Some(config.cache_ttl),
    ));
    let provider = Arc::new(PlacesProvider::new(
        ReqwestClient::new()?,
        config.provider_api_key.clone(),
        config.search_radius,
    ));
    let metrics = Arc::new(LookupMetrics::new());

    let lookup = Arc::new(LookupOrchestrator::with_metrics(
        config, store, cache, provider, metrics,
    ));

    let app = routes::router(lookup);
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(addr = %args.bind, "Courtside server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
