//! User entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use argentic_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] or [`UserPublic`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub password_hash: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            bio: user.bio,
            profile_image: user.profile_image,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Public user fields safe to show to anyone (search results, mentions).
/// Excludes email as well as the password hash.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: Option<String>,
}

/// Minimal author view embedded in photos and comments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: DbId,
    pub username: String,
    pub profile_image: Option<String>,
}

/// DTO for creating a new user. The password is already hashed by the
/// caller; repositories never see plaintext credentials.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub password_hash: String,
}

/// DTO for updating an existing user. All fields are optional; only
/// non-`None` fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}
