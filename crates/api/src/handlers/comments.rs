//! Handlers for the `/photos/{id}/comments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use argentic_core::error::CoreError;
use argentic_core::types::DbId;
use argentic_db::models::comment::CommentView;
use argentic_db::repositories::{CommentRepo, PhotoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /photos/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub content: Option<String>,
}

/// Request body for `DELETE /photos/{id}/comments`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentRequest {
    pub comment_id: DbId,
}

/// Response body for a deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /photos/{id}/comments
///
/// All comments for a photo, newest first, each carrying the author's
/// public fields.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
) -> AppResult<Json<Vec<CommentView>>> {
    let comments = CommentRepo::list_for_photo(&state.pool, photo_id)
        .await?
        .into_iter()
        .map(|row| row.into_view())
        .collect();

    Ok(Json(comments))
}

/// POST /photos/{id}/comments
///
/// Add a comment as the authenticated principal. The insert and the
/// counter increment commit together; the response embeds the author so
/// clients can render it without a follow-up fetch.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    user: AuthUser,
    Json(input): Json<AddCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentView>)> {
    let content = input
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Content is required".into())))?;

    let row = CommentRepo::create(&state.pool, photo_id, user.user_id, &content)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Photo", photo_id)))?;

    Ok((StatusCode::CREATED, Json(row.into_view())))
}

/// DELETE /photos/{id}/comments
///
/// Delete a comment. Permitted to the comment's author and to the
/// photo's owner (who may moderate their own photo); anyone else is
/// rejected before anything is touched.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    user: AuthUser,
    Json(input): Json<DeleteCommentRequest>,
) -> AppResult<Json<DeleteResponse>> {
    let comment = CommentRepo::find_by_id(&state.pool, input.comment_id)
        .await?
        .filter(|c| c.photo_id == photo_id)
        .ok_or_else(|| AppError::Core(CoreError::not_found("Comment", input.comment_id)))?;

    let photo = PhotoRepo::find_by_id(&state.pool, photo_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Photo", photo_id)))?;

    if comment.user_id != user.user_id && photo.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the comment's author or the photo's owner can delete it".into(),
        )));
    }

    CommentRepo::delete(&state.pool, comment.id, photo_id).await?;

    Ok(Json(DeleteResponse { success: true }))
}
