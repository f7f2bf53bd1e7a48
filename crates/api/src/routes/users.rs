//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET /users/search?q=    -> public user search
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users/search", get(users::search_users))
}
