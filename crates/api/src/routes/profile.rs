//! Route definitions for the `/profile` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// ```text
/// GET /profile/{username}    -> public profile
/// PUT /profile               -> update bio / profile image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile/{username}", get(profile::get_profile))
        .route("/profile", put(profile::update_profile))
}
