//! Repository for the `comments` table and the `photos.comments_count`
//! counter.

use sqlx::PgPool;

use argentic_core::types::DbId;

use crate::models::comment::{Comment, CommentAuthorRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content, user_id, photo_id, created_at";

/// Joined comment + author column list for [`CommentAuthorRow`].
const AUTHOR_COLUMNS: &str = "c.id, c.content, c.user_id, c.photo_id, c.created_at, \
     u.username AS author_username, u.profile_image AS author_profile_image";

/// Provides comment CRUD and the paired counter mutations.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment and increment the photo's comment counter in one
    /// transaction, returning the created row joined with its author.
    ///
    /// The counter increment runs first: its row lock on the photo
    /// serializes concurrent engagement writes, and zero rows affected
    /// doubles as the photo-existence check.
    ///
    /// Returns `None` if the photo does not exist.
    pub async fn create(
        pool: &PgPool,
        photo_id: DbId,
        user_id: DbId,
        content: &str,
    ) -> Result<Option<CommentAuthorRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let bumped =
            sqlx::query("UPDATE photos SET comments_count = comments_count + 1 WHERE id = $1")
                .bind(photo_id)
                .execute(&mut *tx)
                .await?;

        if bumped.rows_affected() == 0 {
            return Ok(None);
        }

        let comment_id: DbId = sqlx::query_scalar(
            "INSERT INTO comments (content, user_id, photo_id)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(content)
        .bind(user_id)
        .bind(photo_id)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "SELECT {AUTHOR_COLUMNS}
             FROM comments c
             JOIN users u ON c.user_id = u.id
             WHERE c.id = $1"
        );
        let row = sqlx::query_as::<_, CommentAuthorRow>(&query)
            .bind(comment_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    /// Find a comment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment and decrement the photo's comment counter
    /// (clamped at zero) in one transaction.
    ///
    /// Authorization is the caller's responsibility. Returns `false` if
    /// the comment was already gone, in which case the counter is left
    /// untouched.
    pub async fn delete(pool: &PgPool, comment_id: DbId, photo_id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE photos SET comments_count = GREATEST(comments_count - 1, 0) WHERE id = $1",
        )
        .bind(photo_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// All comments for a photo, newest first, joined with author public
    /// fields.
    pub async fn list_for_photo(
        pool: &PgPool,
        photo_id: DbId,
    ) -> Result<Vec<CommentAuthorRow>, sqlx::Error> {
        let query = format!(
            "SELECT {AUTHOR_COLUMNS}
             FROM comments c
             JOIN users u ON c.user_id = u.id
             WHERE c.photo_id = $1
             ORDER BY c.created_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, CommentAuthorRow>(&query)
            .bind(photo_id)
            .fetch_all(pool)
            .await
    }

    /// Number of comment rows for a photo (the ground truth the
    /// denormalized counter must match).
    pub async fn count_for_photo(pool: &PgPool, photo_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE photo_id = $1")
            .bind(photo_id)
            .fetch_one(pool)
            .await
    }
}
