//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /auth    -> sign up
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auth", post(auth::signup))
}
