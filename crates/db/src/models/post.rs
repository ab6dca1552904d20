//! Post model and request payload.

use postboard_core::types::{DbId, Timestamp};
use postboard_core::validation::Fields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating a post or replacing an existing one.
///
/// Missing JSON keys decode to empty strings so they surface as validation
/// errors rather than decode failures.
#[derive(Debug, Clone, Default, Deserialize, Fields)]
pub struct PostInput {
    #[serde(default)]
    #[field(name = "Title")]
    pub title: String,
    #[serde(default)]
    #[field(name = "Content")]
    pub content: String,
}
