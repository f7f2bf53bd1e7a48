//! Route definitions for the `/photos` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comments, photos};
use crate::state::AppState;

/// ```text
/// GET    /photos                  -> feed
/// POST   /photos                  -> create photo
/// GET    /photos/{id}             -> get photo
/// DELETE /photos/{id}             -> delete photo (owner)
/// POST   /photos/{id}/like        -> toggle like
/// GET    /photos/{id}/comments    -> list comments
/// POST   /photos/{id}/comments    -> add comment
/// DELETE /photos/{id}/comments    -> delete comment (author/owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/photos", get(photos::feed).post(photos::create_photo))
        .route(
            "/photos/{id}",
            get(photos::get_photo).delete(photos::delete_photo),
        )
        .route("/photos/{id}/like", post(photos::toggle_like))
        .route(
            "/photos/{id}/comments",
            get(comments::list_comments)
                .post(comments::add_comment)
                .delete(comments::delete_comment),
        )
}
