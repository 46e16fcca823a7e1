use axum::{http::StatusCode, response::IntoResponse};

pub async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
