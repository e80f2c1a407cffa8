use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use talentpool::config::Config;
use talentpool::db::{create_pool, init_schema};
use talentpool::routes::build_router;
use talentpool::seed::{SeedOutcome, Seeder};
use talentpool::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talentpool API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL. The pool connects lazily and schema bootstrap
    // is best-effort: a store outage at boot degrades reads to 503s, it
    // never keeps the service from starting.
    let db = create_pool(&config.database_url)?;
    if let Err(e) = init_schema(&db).await {
        warn!("Schema bootstrap failed, continuing degraded: {e:#}");
    }

    // Seed before binding the listener so no request races initialization.
    // A failed seed is logged here and reported by /healthz; serving
    // continues with whatever data exists.
    let seed = Seeder::new()
        .ensure_seeded(&db, Path::new(&config.fixtures_dir))
        .await;
    if let SeedOutcome::Failed { detail } = &seed.outcome {
        warn!("Serving without seed data: {detail}");
    }

    let state = AppState { db, seed };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
