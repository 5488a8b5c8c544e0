/**
 * API Route Configuration
 *
 * This module wires handlers to paths.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user info
 * - `POST /api/auth/change-password` - Change password
 *
 * ## Users
 * - `GET /api/users/me` - Get own profile
 * - `PATCH /api/users/me` - Update own profile
 *
 * ## Posts
 * - `POST /api/posts` - Create post
 * - `GET /api/posts` - List posts (pagination or title filter)
 * - `GET /api/posts/{post_id}` - Get post
 * - `PATCH /api/posts/{post_id}` - Update own post
 * - `DELETE /api/posts/{post_id}` - Delete own post
 *
 * # Authentication
 *
 * Protected handlers declare an `AuthUser` parameter; the extractor rejects
 * requests without a valid token before the handler body runs. Signup,
 * login, and the post read endpoints are public.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers::{change_password, get_me, login, signup};
use crate::posts::handlers::{create_post, delete_post, get_post, list_posts, update_post};
use crate::server::state::AppState;
use crate::users::handlers::{get_profile, update_profile};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with all API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/change-password", post(change_password))
        // Profile endpoints
        .route("/api/users/me", get(get_profile).patch(update_profile))
        // Post endpoints
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{post_id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
}
