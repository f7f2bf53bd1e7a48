//! Route definitions for the `/settings` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// ```text
/// PUT    /settings    -> update account fields
/// DELETE /settings    -> delete account
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/settings",
        put(settings::update_settings).delete(settings::delete_account),
    )
}
