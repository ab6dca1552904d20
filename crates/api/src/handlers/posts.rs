//! Handlers for the `/posts` resource.
//!
//! Create and update payloads go through the shared post rule set before
//! they reach the store; a payload with any field error is rejected as a
//! whole with every failure listed.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use postboard_core::error::CoreError;
use postboard_core::post::validate_post;
use postboard_core::types::DbId;
use postboard_db::models::post::PostInput;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedPost {
    pub id: DbId,
}

/// GET /api/v1/posts
///
/// List all posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = state.store.list().await?;

    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = post_id(path)?;
    let post = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(not_found(id)))?;

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/posts
///
/// Validate and insert a new post. Returns 201 with the stored row.
pub async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<PostInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = checked_input(body)?;
    let post = state.store.create(&input).await?;

    tracing::info!(post_id = post.id, title = %post.title, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/v1/posts/{id}
///
/// Validate and replace an existing post's title and content.
pub async fn update_post(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<PostInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = post_id(path)?;
    let input = checked_input(body)?;
    let post = state
        .store
        .update(id, &input)
        .await?
        .ok_or(AppError::Core(not_found(id)))?;

    tracing::info!(post_id = id, "Post updated");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = post_id(path)?;
    if !state.store.delete(id).await? {
        return Err(AppError::Core(not_found(id)));
    }

    tracing::info!(post_id = id, "Post deleted");

    Ok(Json(DataResponse {
        data: DeletedPost { id },
    }))
}

fn post_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    let Path(id) = path.map_err(|_| AppError::BadRequest("invalid post id".to_string()))?;
    Ok(id)
}

/// Decode and validate a post payload.
fn checked_input(body: Result<Json<PostInput>, JsonRejection>) -> AppResult<PostInput> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if let Err(err) = validate_post(&input) {
        tracing::debug!(error = %err, "Rejected post payload");
        return Err(err.into());
    }

    Ok(input)
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Post", id }
}
