use axum::response::IntoResponse;

/// Liveness probe: always succeeds, checks no dependencies.
pub async fn health_check() -> impl IntoResponse {
    "OK"
}
