//! Repository for the `likes` table and the `photos.likes` counter.

use sqlx::PgPool;

use argentic_core::types::DbId;

use crate::models::like::LikeToggle;

/// Provides the like toggle and read helpers.
pub struct LikeRepo;

impl LikeRepo {
    /// Atomically flip the like state for a (user, photo) pair.
    ///
    /// The transaction first takes a row lock on the photo
    /// (`SELECT ... FOR UPDATE`), so concurrent toggles on the same
    /// photo serialize and the counter cannot lose updates. The
    /// decrement clamps at zero, and the returned counter is read back
    /// inside the same transaction. The unique `(user_id, photo_id)`
    /// constraint guarantees at-most-one-like even if the pre-check is
    /// raced on a different photo row.
    ///
    /// Returns `None` if the photo does not exist.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        photo_id: DbId,
    ) -> Result<Option<LikeToggle>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let photo: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM photos WHERE id = $1 FOR UPDATE")
                .bind(photo_id)
                .fetch_optional(&mut *tx)
                .await?;

        if photo.is_none() {
            return Ok(None);
        }

        let already_liked: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE user_id = $1 AND photo_id = $2)",
        )
        .bind(user_id)
        .bind(photo_id)
        .fetch_one(&mut *tx)
        .await?;

        let likes: i32 = if already_liked {
            sqlx::query("DELETE FROM likes WHERE user_id = $1 AND photo_id = $2")
                .bind(user_id)
                .bind(photo_id)
                .execute(&mut *tx)
                .await?;

            sqlx::query_scalar(
                "UPDATE photos SET likes = GREATEST(likes - 1, 0)
                 WHERE id = $1
                 RETURNING likes",
            )
            .bind(photo_id)
            .fetch_one(&mut *tx)
            .await?
        } else {
            sqlx::query("INSERT INTO likes (user_id, photo_id) VALUES ($1, $2)")
                .bind(user_id)
                .bind(photo_id)
                .execute(&mut *tx)
                .await?;

            sqlx::query_scalar(
                "UPDATE photos SET likes = likes + 1
                 WHERE id = $1
                 RETURNING likes",
            )
            .bind(photo_id)
            .fetch_one(&mut *tx)
            .await?
        };

        tx.commit().await?;

        Ok(Some(LikeToggle {
            liked: !already_liked,
            likes,
        }))
    }

    /// Does a like row exist for this (user, photo) pair?
    pub async fn is_liked_by(
        pool: &PgPool,
        photo_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE photo_id = $1 AND user_id = $2)",
        )
        .bind(photo_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Of the given photos, the ones this user has liked. One query for
    /// the whole feed instead of a per-photo existence check.
    pub async fn liked_ids_for_user(
        pool: &PgPool,
        user_id: DbId,
        photo_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT photo_id FROM likes WHERE user_id = $1 AND photo_id = ANY($2)",
        )
        .bind(user_id)
        .bind(photo_ids)
        .fetch_all(pool)
        .await
    }

    /// Number of like rows for a photo (the ground truth the
    /// denormalized counter must match).
    pub async fn count_for_photo(pool: &PgPool, photo_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE photo_id = $1")
            .bind(photo_id)
            .fetch_one(pool)
            .await
    }
}
