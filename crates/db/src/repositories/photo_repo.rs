//! Repository for the `photos` table.

use sqlx::PgPool;

use argentic_core::types::DbId;

use crate::models::photo::{CreatePhoto, Photo, PhotoOwnerRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, url, title, user_id, likes, comments_count, created_at";

/// Joined photo + owner column list (owner columns aliased for
/// [`PhotoOwnerRow`]).
const OWNER_COLUMNS: &str = "p.id, p.url, p.title, p.likes, p.comments_count, p.created_at, \
     u.id AS owner_id, u.username AS owner_username, u.profile_image AS owner_profile_image";

/// Provides CRUD operations for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a new photo. The URL is persisted verbatim; the binary it
    /// points at lives in external object storage.
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (url, title, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(&input.url)
            .bind(&input.title)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a photo by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a photo joined with its owner's public fields.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PhotoOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM photos p
             JOIN users u ON p.user_id = u.id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PhotoOwnerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All photos newest-first, joined with owner public fields.
    pub async fn feed(pool: &PgPool) -> Result<Vec<PhotoOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM photos p
             JOIN users u ON p.user_id = u.id
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PhotoOwnerRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// A user's photos, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a photo and all likes/comments referencing it, in one
    /// transaction. Returns `false` if the photo does not exist.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE photo_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM likes WHERE photo_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
