use serde_json::Value;
use sqlx::PgPool;

/// Returns every job document. Ordered by id so output is stable across
/// calls; callers rely on no ordering beyond that.
pub async fn list_jobs(pool: &PgPool) -> Result<Vec<Value>, sqlx::Error> {
    sqlx::query_scalar::<_, Value>("SELECT doc FROM jobs ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Returns every candidate document whose `applied_jobs` contains `job_id`,
/// in fixture order. An unknown job id is not an error; it matches nothing.
pub async fn list_candidates_for_job(
    pool: &PgPool,
    job_id: &str,
) -> Result<Vec<Value>, sqlx::Error> {
    sqlx::query_scalar::<_, Value>(
        "SELECT doc FROM candidates WHERE $1 = ANY(applied_jobs) ORDER BY id",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}
