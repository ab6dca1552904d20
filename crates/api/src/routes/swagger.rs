use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::state::AppState;

/// OpenAPI 3 description of the post endpoints, embedded at compile time.
pub const OPENAPI_DOCUMENT: &str = include_str!("../../openapi/swagger.json");

/// GET /swagger -- serves the OpenAPI document.
async fn swagger() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}

/// Mount the OpenAPI document at `/swagger` (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/swagger", get(swagger))
}
