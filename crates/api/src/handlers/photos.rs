//! Handlers for the `/photos` resource: the feed, single-photo reads,
//! creation/deletion, and the like toggle.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use argentic_core::error::CoreError;
use argentic_core::types::DbId;
use argentic_db::models::like::LikeToggle;
use argentic_db::models::photo::{CreatePhoto, Photo, PhotoView};
use argentic_db::repositories::{LikeRepo, PhotoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /photos`. The URL points at the binary the
/// client already placed in object storage; it is persisted verbatim.
#[derive(Debug, Deserialize)]
pub struct CreatePhotoRequest {
    pub url: Option<String>,
    pub title: Option<String>,
}

/// Response body for a deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// POST /photos
pub async fn create_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePhotoRequest>,
) -> AppResult<(StatusCode, Json<Photo>)> {
    let url = input
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Photo URL is required".into())))?;

    let photo = PhotoRepo::create(
        &state.pool,
        &CreatePhoto {
            url,
            title: input.title,
            user_id: user.user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(photo)))
}

/// GET /photos
///
/// All photos newest-first. When a principal is present, each photo's
/// `isLiked` reflects that viewer; anonymous requests always see false.
pub async fn feed(
    State(state): State<AppState>,
    viewer: Option<AuthUser>,
) -> AppResult<Json<Vec<PhotoView>>> {
    let rows = PhotoRepo::feed(&state.pool).await?;

    let liked: HashSet<DbId> = match viewer {
        Some(user) => {
            let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
            LikeRepo::liked_ids_for_user(&state.pool, user.user_id, &ids)
                .await?
                .into_iter()
                .collect()
        }
        None => HashSet::new(),
    };

    let photos = rows
        .into_iter()
        .map(|row| {
            let is_liked = liked.contains(&row.id);
            row.into_view(is_liked)
        })
        .collect();

    Ok(Json(photos))
}

/// GET /photos/{id}
pub async fn get_photo(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    viewer: Option<AuthUser>,
) -> AppResult<Json<PhotoView>> {
    let row = PhotoRepo::find_with_owner(&state.pool, photo_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Photo", photo_id)))?;

    let is_liked = match viewer {
        Some(user) => LikeRepo::is_liked_by(&state.pool, photo_id, user.user_id).await?,
        None => false,
    };

    Ok(Json(row.into_view(is_liked)))
}

/// DELETE /photos/{id}
///
/// Owner-only. Removes the photo together with every like and comment
/// referencing it, in one transaction. The stored object's URL was held
/// verbatim; disposing of the binary itself is the storage service's
/// concern, outside this boundary.
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    user: AuthUser,
) -> AppResult<Json<DeleteResponse>> {
    let photo = PhotoRepo::find_by_id(&state.pool, photo_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Photo", photo_id)))?;

    if photo.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the photo's owner can delete it".into(),
        )));
    }

    PhotoRepo::delete_cascade(&state.pool, photo_id).await?;

    Ok(Json(DeleteResponse { success: true }))
}

/// POST /photos/{id}/like
///
/// Toggle the principal's like. Returns the new liked-state and the
/// authoritative counter value read back inside the toggle transaction.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    user: AuthUser,
) -> AppResult<Json<LikeToggle>> {
    let toggle = LikeRepo::toggle(&state.pool, user.user_id, photo_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Photo", photo_id)))?;

    Ok(Json(toggle))
}
