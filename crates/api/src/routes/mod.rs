pub mod health;
pub mod posts;
pub mod swagger;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /posts          list, create
/// /posts/{id}     get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/posts", posts::router())
}
