//! Database operations for posts
//!
//! Plain sqlx queries over the `posts` table. Ownership checks live here:
//! update and delete fetch the row first and refuse to touch posts the
//! caller does not own. Missing rows are reported as values, never panics.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::posts::model::Post;

/// Result of an ownership-checked update
#[derive(Debug)]
pub enum UpdatePostOutcome {
    /// Post updated; carries the re-fetched row
    Updated(Post),
    /// No post with the given id
    NotFound,
    /// Post exists but belongs to another user; nothing was written
    NotOwner,
}

/// Create a post owned by the given user
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    user_id: Uuid,
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $4)
        RETURNING id, title, content, user_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Get all posts with limit/offset pagination
///
/// Returns posts in store order. No relevance ranking is applied; this is
/// the insertion point for a future recommendation system.
pub async fn get_all_posts(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, user_id, created_at, updated_at
        FROM posts
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Get posts matching a title, or all posts when no title is given
pub async fn filter_by_title(
    pool: &PgPool,
    title: Option<&str>,
) -> Result<Vec<Post>, sqlx::Error> {
    match title {
        Some(title) => {
            sqlx::query_as::<_, Post>(
                r#"
                SELECT id, title, content, user_id, created_at, updated_at
                FROM posts
                WHERE title = $1
                "#,
            )
            .bind(title)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Post>(
                r#"
                SELECT id, title, content, user_id, created_at, updated_at
                FROM posts
                "#,
            )
            .fetch_all(pool)
            .await
        }
    }
}

/// Get post by id
pub async fn get_post_by_id(pool: &PgPool, post_id: i32) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, user_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// Update a post's title and/or content, enforcing ownership
///
/// An empty string means "leave this field unchanged", not "clear it".
/// Title and content are applied as independent statements; there is no
/// cross-field invariant that would require them to land atomically.
pub async fn update_post(
    pool: &PgPool,
    user_id: Uuid,
    post_id: i32,
    title: &str,
    content: &str,
) -> Result<UpdatePostOutcome, sqlx::Error> {
    let Some(post) = get_post_by_id(pool, post_id).await? else {
        return Ok(UpdatePostOutcome::NotFound);
    };

    if post.user_id != user_id {
        return Ok(UpdatePostOutcome::NotOwner);
    }

    let now = Utc::now();

    if !title.is_empty() {
        sqlx::query("UPDATE posts SET title = $1, updated_at = $2 WHERE id = $3")
            .bind(title)
            .bind(now)
            .bind(post_id)
            .execute(pool)
            .await?;
    }

    if !content.is_empty() {
        sqlx::query("UPDATE posts SET content = $1, updated_at = $2 WHERE id = $3")
            .bind(content)
            .bind(now)
            .bind(post_id)
            .execute(pool)
            .await?;
    }

    match get_post_by_id(pool, post_id).await? {
        Some(post) => Ok(UpdatePostOutcome::Updated(post)),
        // Deleted between the write and the re-fetch
        None => Ok(UpdatePostOutcome::NotFound),
    }
}

/// Delete a post, enforcing ownership
///
/// Returns false when the post is missing or owned by someone else; both
/// are reported the same way so repeated deletes stay quiet.
pub async fn delete_post(pool: &PgPool, post_id: i32, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let Some(post) = get_post_by_id(pool, post_id).await? else {
        return Ok(false);
    };

    if post.user_id != user_id {
        return Ok(false);
    }

    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post.id)
        .execute(pool)
        .await?;

    Ok(true)
}
