//! Handler for the `/users/search` resource.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use argentic_core::error::CoreError;
use argentic_db::models::user::UserPublic;
use argentic_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum query length for a user search.
const MIN_QUERY_LEN: usize = 2;

/// Query string for `GET /users/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Response body for a user search: public fields only, at most 10 rows.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub users: Vec<UserPublic>,
}

/// GET /users/search?q=
///
/// Case-insensitive substring match over username, first name, and last
/// name.
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let query = params.q.unwrap_or_default();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(AppError::Core(CoreError::Validation(
            "Search query must be at least 2 characters".into(),
        )));
    }

    let users = UserRepo::search(&state.pool, &query).await?;

    Ok(Json(SearchResponse { users }))
}
