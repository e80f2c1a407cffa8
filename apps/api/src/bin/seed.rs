//! Operator tool: wipes the jobs and candidates collections and reloads
//! them from the bundled fixtures. Destructive, never reachable from the
//! API; the server's own startup seeding only ever fills an empty store.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use talentpool::config::Config;
use talentpool::db::{create_pool, init_schema};
use talentpool::seed::force_reseed;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = create_pool(&config.database_url)?;
    init_schema(&db).await?;

    let (jobs, candidates) = force_reseed(&db, Path::new(&config.fixtures_dir)).await?;
    info!("Database reseeded ({jobs} jobs, {candidates} candidates)");

    Ok(())
}
