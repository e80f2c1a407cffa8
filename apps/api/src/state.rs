use sqlx::PgPool;

use crate::seed::SeedReport;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Outcome of the startup seeding pass, reported by /healthz.
    pub seed: SeedReport,
}
