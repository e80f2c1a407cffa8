use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
/// Connections are established lazily so a store outage at boot does not
/// keep the service from starting; reads surface the failure per-request.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)?;

    info!("PostgreSQL connection pool configured");
    Ok(pool)
}

/// Creates the jobs and candidates tables if they do not exist yet.
/// Documents are stored as passthrough JSONB; `applied_jobs` is kept in a
/// dedicated TEXT[] column so candidate lookups stay a single array filter.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id  TEXT PRIMARY KEY,
            doc JSONB NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS candidates (
            id           INTEGER PRIMARY KEY,
            doc          JSONB NOT NULL,
            applied_jobs TEXT[] NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
