//! Post model
//!
//! Row type for the `posts` table. The id is assigned by the store and the
//! owner is fixed at creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post in the social feed
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Store-assigned id, monotonically increasing
    pub id: i32,
    /// Post title (required, at most 255 characters)
    pub title: String,
    /// Post body, optional
    pub content: Option<String>,
    /// Owning user; immutable after creation
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
