//! Liveness endpoint, mounted at the root rather than under `/api/v1` so
//! load balancers can probe it without the API prefix.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Reports `degraded` instead of failing the request when the database is
/// unreachable; probes want a 200 with detail, not a 500.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = innsight_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
