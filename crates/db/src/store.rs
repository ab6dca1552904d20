//! Storage seam used by the HTTP layer.
//!
//! [`PgPostStore`] forwards to [`PostRepo`]; tests substitute an in-memory
//! implementation so handlers can run without a database.

use async_trait::async_trait;
use postboard_core::types::DbId;

use crate::models::post::{Post, PostInput};
use crate::repositories::PostRepo;
use crate::DbPool;

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Post>, sqlx::Error>;

    async fn create(&self, input: &PostInput) -> Result<Post, sqlx::Error>;

    /// `None` if no post with `id` exists.
    async fn update(&self, id: DbId, input: &PostInput) -> Result<Option<Post>, sqlx::Error>;

    /// `true` if a post was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// Postgres-backed [`PostStore`].
#[derive(Debug, Clone)]
pub struct PgPostStore {
    pool: DbPool,
}

impl PgPostStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list(&self) -> Result<Vec<Post>, sqlx::Error> {
        PostRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        PostRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, input: &PostInput) -> Result<Post, sqlx::Error> {
        PostRepo::create(&self.pool, input).await
    }

    async fn update(&self, id: DbId, input: &PostInput) -> Result<Option<Post>, sqlx::Error> {
        PostRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        PostRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
