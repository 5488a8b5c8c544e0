/**
 * Post Handlers
 *
 * HTTP handlers for post CRUD.
 *
 * # Endpoints
 *
 * - `POST /api/posts` - Create a post (authenticated)
 * - `GET /api/posts` - List posts with pagination or title filter
 * - `GET /api/posts/{post_id}` - Get a single post
 * - `PATCH /api/posts/{post_id}` - Update own post (authenticated)
 * - `DELETE /api/posts/{post_id}` - Delete own post (authenticated)
 *
 * # Authorization
 *
 * Creation assigns the authenticated caller as the owner. Update and delete
 * are refused for posts owned by another user; the refusal is reported as a
 * plain 400, not a mutation.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::dao::{self, UpdatePostOutcome};
use crate::posts::types::{
    CreatePostRequest, DeletePostResponse, ListPostsQuery, PostResponse, UpdatePostRequest,
};
use crate::server::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// Validate a post title
///
/// Titles must be non-empty and fit the 255-character column.
fn validate_title(title: &str) -> Result<(), ApiError> {
    let length = title.chars().count();
    if length == 0 || length > 255 {
        return Err(ApiError::InvalidTitle);
    }
    Ok(())
}

/// Create post handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `AuthUser(user)` - Authenticated caller, becomes the owner
/// * `Json(request)` - Title and content
///
/// # Returns
///
/// 201 with the persisted post, including its store-assigned id
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    validate_title(&request.title)?;

    let post = dao::create_post(&state.db_pool, &request.title, &request.content, user.user_id)
        .await?;

    tracing::info!("User {} created post {}", user.user_id, post.id);

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// List posts handler
///
/// With a `title` query parameter, returns exact-title matches. Otherwise
/// returns a limit/offset page in store order.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = match query.title.as_deref() {
        Some(title) => dao::filter_by_title(&state.db_pool, Some(title)).await?,
        None => {
            let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(0);
            let offset = query.offset.unwrap_or(0).max(0);
            dao::get_all_posts(&state.db_pool, limit, offset).await?
        }
    };

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Get post handler
///
/// # Errors
///
/// * `404 Not Found` - no post with the given id
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = dao::get_post_by_id(&state.db_pool, post_id)
        .await?
        .ok_or(ApiError::PostNotFound)?;

    Ok(Json(post.into()))
}

/// Update post handler
///
/// Empty request fields are left unchanged. Only the owner may update.
///
/// # Errors
///
/// * `404 Not Found` - no post with the given id
/// * `400 Bad Request` - caller does not own the post
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<i32>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    if !request.title.is_empty() {
        validate_title(&request.title)?;
    }

    let outcome = dao::update_post(
        &state.db_pool,
        user.user_id,
        post_id,
        &request.title,
        &request.content,
    )
    .await?;

    match outcome {
        UpdatePostOutcome::Updated(post) => Ok(Json(post.into())),
        UpdatePostOutcome::NotFound => Err(ApiError::PostNotFound),
        UpdatePostOutcome::NotOwner => {
            tracing::warn!(
                "User {} attempted to update post {} owned by someone else",
                user.user_id,
                post_id
            );
            Err(ApiError::PostAccessDenied)
        }
    }
}

/// Delete post handler
///
/// Missing posts and foreign posts are both refused with the same response,
/// so a repeated delete of the same id simply fails quietly.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<i32>,
) -> Result<Json<DeletePostResponse>, ApiError> {
    let deleted = dao::delete_post(&state.db_pool, post_id, user.user_id).await?;

    if !deleted {
        tracing::warn!("User {} could not delete post {}", user.user_id, post_id);
        return Err(ApiError::PostDeleteRefused);
    }

    tracing::info!("User {} deleted post {}", user.user_id, post_id);

    Ok(Json(DeletePostResponse {
        status: "deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_title_must_be_non_empty() {
        assert_matches!(validate_title(""), Err(ApiError::InvalidTitle));
        assert!(validate_title("Hi").is_ok());
    }

    #[test]
    fn test_title_length_limit_counts_characters() {
        let at_limit: String = "x".repeat(255);
        assert!(validate_title(&at_limit).is_ok());

        let over_limit: String = "x".repeat(256);
        assert_matches!(validate_title(&over_limit), Err(ApiError::InvalidTitle));

        // Multi-byte characters still count as one
        let at_limit_wide: String = "é".repeat(255);
        assert!(validate_title(&at_limit_wide).is_ok());
    }
}
