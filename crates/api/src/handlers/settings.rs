//! Handlers for the `/settings` resource: account field updates and
//! account deletion.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use argentic_core::error::CoreError;
use argentic_db::models::user::{UpdateUser, UserResponse};
use argentic_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /settings`. All fields optional; only supplied
/// fields change. A password change requires the current password.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Response body for a successful settings update.
#[derive(Debug, Serialize)]
pub struct UpdateSettingsResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

/// Response body for a successful account deletion.
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub message: &'static str,
}

/// PUT /settings
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateSettingsRequest>,
) -> AppResult<Json<UpdateSettingsResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    // Username pre-check for a friendly message; the unique constraint
    // still backs it up if two renames race.
    if let Some(username) = input.username.as_deref() {
        if username != user.username
            && UserRepo::username_taken_by_other(&state.pool, username, user.id).await?
        {
            return Err(AppError::Core(CoreError::Conflict(
                "Username already taken".into(),
            )));
        }
    }

    let password_hash = match &input.new_password {
        Some(new_password) => {
            let current = input.current_password.as_deref().unwrap_or_default();
            let current_valid =
                verify_password(current, &user.password_hash).unwrap_or(false);
            if !current_valid {
                return Err(AppError::Core(CoreError::Unauthorized(
                    "Current password is incorrect".into(),
                )));
            }
            let hashed = hash_password(new_password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
            Some(hashed)
        }
        None => None,
    };

    let update = UpdateUser {
        first_name: input.first_name,
        last_name: input.last_name,
        username: input.username,
        password_hash,
        ..UpdateUser::default()
    };

    let updated = UserRepo::update(&state.pool, user.id, &update)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user.id)))?;

    Ok(Json(UpdateSettingsResponse {
        message: "Settings updated successfully",
        user: updated.into(),
    }))
}

/// DELETE /settings
///
/// Delete the principal's account. One transaction removes the user's
/// comments and likes (correcting counters on photos that survive),
/// everything referencing the user's photos, the photos, and finally
/// the user row itself. A failure anywhere rolls the whole thing back.
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DeleteAccountResponse>> {
    let deleted = UserRepo::delete_account_cascade(&state.pool, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::not_found("User", auth.user_id)));
    }

    tracing::info!(user_id = auth.user_id, "Account deleted");

    Ok(Json(DeleteAccountResponse {
        message: "Account deleted successfully",
    }))
}
