//! Handler for the `/auth` resource (account creation).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use argentic_core::error::CoreError;
use argentic_db::models::user::{CreateUser, UserResponse};
use argentic_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth`.
///
/// Fields are optional at the type level so a missing field produces the
/// contract's validation error rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
}

/// Response body for a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

/// POST /auth
///
/// Create an account. The application-level uniqueness pre-check only
/// improves the error message; the storage constraints remain the
/// authoritative enforcement, and a raced duplicate insert maps to the
/// same conflict response.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let (first_name, last_name, email, date_of_birth, password, username) = match (
        non_empty(input.first_name),
        non_empty(input.last_name),
        non_empty(input.email),
        non_empty(input.date_of_birth),
        non_empty(input.password),
        non_empty(input.username),
    ) {
        (Some(f), Some(l), Some(e), Some(d), Some(p), Some(u)) => (f, l, e, d, p, u),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "All fields are required".into(),
            )))
        }
    };

    let date_of_birth = parse_date_of_birth(&date_of_birth)?;

    if UserRepo::email_or_username_taken(&state.pool, &email, &username).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "This email or username is already taken".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            username,
            first_name,
            last_name,
            date_of_birth,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Account created successfully",
            user: user.into(),
        }),
    ))
}

/// Treat a missing or all-whitespace field as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Normalize the submitted date of birth to a calendar date, accepting
/// either a plain `YYYY-MM-DD` or a full RFC 3339 timestamp (whose
/// time-of-day is dropped).
fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, AppError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.date_naive());
    }
    Err(AppError::Core(CoreError::Validation(
        "Invalid date of birth".into(),
    )))
}
