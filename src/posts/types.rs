/**
 * Post Handler Types
 *
 * Request and response types for the post endpoints.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::posts::model::Post;

/// Create post request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    /// Post title (1-255 characters)
    pub title: String,
    /// Post body
    pub content: String,
}

/// Update post request
///
/// Fields default to the empty string, which means "leave unchanged".
/// There is currently no way to clear a field through this endpoint.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Query parameters for listing posts
#[derive(Deserialize, Debug)]
pub struct ListPostsQuery {
    /// Page size, defaults to 10
    pub limit: Option<i64>,
    /// Page start, defaults to 0
    pub offset: Option<i64>,
    /// Exact-title filter; when present, pagination is ignored
    pub title: Option<String>,
}

/// Post response payload
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Delete post response payload
#[derive(Serialize, Debug)]
pub struct DeletePostResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_fields_default_to_empty() {
        let request: UpdatePostRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.title, "");
        assert_eq!(request.content, "");

        let request: UpdatePostRequest =
            serde_json::from_str(r#"{"title": "Bye"}"#).unwrap();
        assert_eq!(request.title, "Bye");
        assert_eq!(request.content, "");
    }

    #[test]
    fn test_list_query_all_fields_optional() {
        let query: ListPostsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.limit.is_none());
        assert!(query.offset.is_none());
        assert!(query.title.is_none());
    }
}
