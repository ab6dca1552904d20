//! Route definitions for posts.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Post routes mounted at `/posts`.
///
/// ```text
/// GET    /       -> list_posts
/// POST   /       -> create_post
/// GET    /{id}   -> get_post
/// PUT    /{id}   -> update_post
/// DELETE /{id}   -> delete_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
}
