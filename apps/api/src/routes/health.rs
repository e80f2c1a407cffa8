use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Returns a simple status object with service version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "talentpool-api"
    }))
}

/// GET /healthz
/// Liveness plus data-layer detail: store reachability and the outcome of
/// the startup seeding pass.
pub async fn healthz_handler(State(state): State<AppState>) -> Json<Value> {
    let store = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => "up",
        Err(e) => {
            tracing::warn!("Health check could not reach the store: {e}");
            "down"
        }
    };

    let status = if store == "up" { "ok" } else { "degraded" };
    Json(json!({
        "status": status,
        "store": store,
        "seed": state.seed,
    }))
}
