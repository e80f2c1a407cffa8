pub mod health;

use axum::{routing::get, Router};

use crate::directory::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/healthz", get(health::healthz_handler))
        .route("/api/jobs", get(handlers::handle_list_jobs))
        .route(
            "/api/jobs/:job_id/candidates",
            get(handlers::handle_list_candidates),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::seed::{SeedOutcome, SeedReport};

    /// State whose pool points at nothing. Lazy connect means construction
    /// succeeds and the first query surfaces the outage.
    fn unreachable_state() -> AppState {
        let db = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://127.0.0.1:1/unreachable")
            .expect("lazy pool");
        AppState {
            db,
            seed: SeedReport::now(SeedOutcome::Failed {
                detail: "store unreachable".to_string(),
            }),
        }
    }

    async fn get_json(
        app: Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, body)
    }

    #[tokio::test]
    async fn root_reports_service_identity() {
        let (status, body) = get_json(build_router(unreachable_state()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "talentpool-api");
    }

    #[tokio::test]
    async fn healthz_surfaces_store_outage_and_seed_outcome() {
        let (status, body) = get_json(build_router(unreachable_state()), "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["store"], "down");
        assert_eq!(body["seed"]["outcome"], "failed");
        assert_eq!(body["seed"]["detail"], "store unreachable");
    }

    #[tokio::test]
    async fn jobs_route_returns_503_when_store_unreachable() {
        let (status, body) = get_json(build_router(unreachable_state()), "/api/jobs").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "DATA_UNAVAILABLE");
    }

    #[tokio::test]
    async fn candidates_route_returns_503_when_store_unreachable() {
        let (status, body) =
            get_json(build_router(unreachable_state()), "/api/jobs/J1/candidates").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "DATA_UNAVAILABLE");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = build_router(unreachable_state())
            .oneshot(
                Request::builder()
                    .uri("/api/candidates")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
