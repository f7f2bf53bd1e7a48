//! Comment entity model.

use serde::Serialize;
use sqlx::FromRow;

use argentic_core::types::{DbId, Timestamp};

use crate::models::user::AuthorView;

/// Comment row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub user_id: DbId,
    pub photo_id: DbId,
    pub created_at: Timestamp,
}

/// Flat comment + author row produced by the `comments JOIN users` queries.
#[derive(Debug, Clone, FromRow)]
pub struct CommentAuthorRow {
    pub id: DbId,
    pub content: String,
    pub user_id: DbId,
    pub photo_id: DbId,
    pub created_at: Timestamp,
    pub author_username: String,
    pub author_profile_image: Option<String>,
}

impl CommentAuthorRow {
    /// Shape the flat row into the nested API representation.
    pub fn into_view(self) -> CommentView {
        CommentView {
            id: self.id,
            content: self.content,
            user_id: self.user_id,
            photo_id: self.photo_id,
            created_at: self.created_at,
            user: AuthorView {
                id: self.user_id,
                username: self.author_username,
                profile_image: self.author_profile_image,
            },
        }
    }
}

/// Comment representation for API responses, with the author's minimal
/// public view embedded for immediate display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: DbId,
    pub content: String,
    pub user_id: DbId,
    pub photo_id: DbId,
    pub created_at: Timestamp,
    pub user: AuthorView,
}
