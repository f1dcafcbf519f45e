use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /health - liveness check
pub async fn health() -> Response {
    (StatusCode::OK, Json("Health OK")).into_response()
}
