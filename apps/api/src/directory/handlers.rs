use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::directory::queries;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, AppError> {
    let jobs = queries::list_jobs(&state.db).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:job_id/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let candidates = queries::list_candidates_for_job(&state.db, &job_id).await?;
    Ok(Json(candidates))
}
