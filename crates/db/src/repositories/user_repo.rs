//! Repository for the `users` table.

use sqlx::PgPool;

use argentic_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User, UserPublic};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, username, first_name, last_name, date_of_birth, \
                        password_hash, bio, profile_image, role, created_at";

/// Maximum number of rows returned by a user search.
const SEARCH_LIMIT: i64 = 10;

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Uniqueness of email and username is enforced by the
    /// `uq_users_email` / `uq_users_username` constraints; a violation
    /// surfaces as a database error the API layer maps to a conflict.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, username, first_name, last_name, date_of_birth, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Pre-check for signup: does any user already hold this email or
    /// username? This only exists to produce a friendly error before the
    /// insert; the unique constraints remain the authoritative check.
    pub async fn email_or_username_taken(
        pool: &PgPool,
        email: &str,
        username: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 OR username = $2)",
        )
        .bind(email)
        .bind(username)
        .fetch_one(pool)
        .await
    }

    /// Is this username held by a user other than `id`?
    pub async fn username_taken_by_other(
        pool: &PgPool,
        username: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 AND id <> $2)",
        )
        .bind(username)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                username = COALESCE($4, username),
                password_hash = COALESCE($5, password_hash),
                bio = COALESCE($6, bio),
                profile_image = COALESCE($7, profile_image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.bio)
            .bind(&input.profile_image)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over username, first name, and
    /// last name. Returns public fields only, capped at 10 rows.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<UserPublic>, sqlx::Error> {
        let pattern = format!("%{query}%");
        sqlx::query_as::<_, UserPublic>(
            "SELECT id, username, first_name, last_name, profile_image
             FROM users
             WHERE username ILIKE $1 OR first_name ILIKE $1 OR last_name ILIKE $1
             ORDER BY username
             LIMIT $2",
        )
        .bind(&pattern)
        .bind(SEARCH_LIMIT)
        .fetch_all(pool)
        .await
    }

    /// Delete an account and everything it touches, all-or-nothing.
    ///
    /// Order matters: first correct the denormalized counters on photos
    /// that will survive (other users' photos this user liked or
    /// commented on), then remove children before parents. The foreign
    /// key cascades exist as a referential-integrity backstop only.
    ///
    /// Returns `false` if no user with the given `id` exists.
    pub async fn delete_account_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Counter corrections on surviving photos.
        sqlx::query(
            "UPDATE photos p
             SET likes = GREATEST(p.likes - l.cnt, 0)
             FROM (SELECT photo_id, COUNT(*)::int AS cnt
                   FROM likes WHERE user_id = $1 GROUP BY photo_id) l
             WHERE p.id = l.photo_id AND p.user_id <> $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE photos p
             SET comments_count = GREATEST(p.comments_count - c.cnt, 0)
             FROM (SELECT photo_id, COUNT(*)::int AS cnt
                   FROM comments WHERE user_id = $1 GROUP BY photo_id) c
             WHERE p.id = c.photo_id AND p.user_id <> $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        // Rows authored by the user.
        sqlx::query("DELETE FROM comments WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM likes WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Rows referencing the user's photos (other users' engagement).
        sqlx::query(
            "DELETE FROM comments WHERE photo_id IN (SELECT id FROM photos WHERE user_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "DELETE FROM likes WHERE photo_id IN (SELECT id FROM photos WHERE user_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM photos WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
