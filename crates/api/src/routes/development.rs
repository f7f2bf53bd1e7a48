//! Route definition for the film development lookup.

use axum::routing::post;
use axum::Router;

use crate::handlers::development;
use crate::state::AppState;

/// ```text
/// POST /development-time    -> static film development lookup
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/development-time", post(development::development_time))
}
