//! Route definitions for the `/session` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// ```text
/// POST /session    -> log in
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/session", post(session::login))
}
