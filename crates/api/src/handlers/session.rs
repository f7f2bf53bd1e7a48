//! Handler for the `/session` resource (login).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use argentic_core::error::CoreError;
use argentic_db::models::user::UserResponse;
use argentic_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /session`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response: the user (never including the password
/// hash) and a short-lived bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// POST /session
///
/// Authenticate with email + password. An unknown email and a wrong
/// password produce byte-identical failures so the response leaks
/// nothing about which half was wrong. A malformed stored hash is also
/// folded into the same failure rather than surfacing as a server error.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        return Err(invalid());
    }

    let token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::debug!(user_id = user.id, "Login succeeded");

    Ok(Json(LoginResponse {
        user: user.into(),
        token,
    }))
}
