//! Photo entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use argentic_core::types::{DbId, Timestamp};

use crate::models::user::AuthorView;

/// Photo row from the `photos` table.
///
/// `likes` and `comments_count` are denormalized aggregates maintained
/// transactionally by the like/comment repositories. They are never
/// written from client input.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: DbId,
    pub url: String,
    pub title: Option<String>,
    pub user_id: DbId,
    pub likes: i32,
    pub comments_count: i32,
    pub created_at: Timestamp,
}

/// Flat photo + owner row produced by the `photos JOIN users` queries.
#[derive(Debug, Clone, FromRow)]
pub struct PhotoOwnerRow {
    pub id: DbId,
    pub url: String,
    pub title: Option<String>,
    pub likes: i32,
    pub comments_count: i32,
    pub created_at: Timestamp,
    pub owner_id: DbId,
    pub owner_username: String,
    pub owner_profile_image: Option<String>,
}

impl PhotoOwnerRow {
    /// Shape the flat row into the nested API representation.
    pub fn into_view(self, is_liked: bool) -> PhotoView {
        PhotoView {
            id: self.id,
            url: self.url,
            title: self.title,
            likes: self.likes,
            comments_count: self.comments_count,
            created_at: self.created_at,
            user: AuthorView {
                id: self.owner_id,
                username: self.owner_username,
                profile_image: self.owner_profile_image,
            },
            is_liked,
        }
    }
}

/// Photo representation for API responses: owner embedded, liked-state
/// resolved for the viewing principal (false when anonymous).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoView {
    pub id: DbId,
    pub url: String,
    pub title: Option<String>,
    pub likes: i32,
    pub comments_count: i32,
    pub created_at: Timestamp,
    pub user: AuthorView,
    pub is_liked: bool,
}

/// DTO for creating a new photo. The URL points at externally stored
/// binary data and is persisted verbatim.
#[derive(Debug)]
pub struct CreatePhoto {
    pub url: String,
    pub title: Option<String>,
    pub user_id: DbId,
}
