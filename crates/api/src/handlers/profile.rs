//! Handlers for the `/profile` resource: the public profile page and
//! bio / profile-image updates.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use argentic_core::error::CoreError;
use argentic_db::models::photo::Photo;
use argentic_db::models::user::{UpdateUser, UserResponse};
use argentic_db::repositories::{PhotoRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /profile`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

/// Derived profile statistics, folded over the photos' denormalized
/// counters rather than recounted from the like/comment tables.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_photos: usize,
    pub total_likes: i64,
    pub total_comments: i64,
}

/// Response body for `GET /profile/{username}`: the user's fields
/// (minus password), their photos newest-first, and the stats fold.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub photos: Vec<Photo>,
    pub stats: ProfileStats,
}

/// GET /profile/{username}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                key: username.clone(),
            })
        })?;

    let photos = PhotoRepo::list_by_user(&state.pool, user.id).await?;

    let stats = ProfileStats {
        total_photos: photos.len(),
        total_likes: photos.iter().map(|p| i64::from(p.likes)).sum(),
        total_comments: photos.iter().map(|p| i64::from(p.comments_count)).sum(),
    };

    Ok(Json(ProfileResponse {
        user: user.into(),
        photos,
        stats,
    }))
}

/// PUT /profile
///
/// Update the principal's bio and/or profile-image pointer. The image
/// URL is stored verbatim; the binary lives in external object storage.
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let update = UpdateUser {
        bio: input.bio,
        profile_image: input.profile_image,
        ..UpdateUser::default()
    };

    let updated = UserRepo::update(&state.pool, user.user_id, &update)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user.user_id)))?;

    Ok(Json(updated.into()))
}
