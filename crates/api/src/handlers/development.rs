//! Handler for the `/development-time` lookup.

use axum::Json;
use serde::Deserialize;

use argentic_core::development::{self, DevelopmentTime};

use crate::error::AppResult;

/// Request body for `POST /development-time`.
#[derive(Debug, Deserialize)]
pub struct DevelopmentTimeRequest {
    pub film: String,
    pub developer: String,
    pub iso: u32,
}

/// POST /development-time
///
/// Static keyed lookup; no state is read or written.
pub async fn development_time(
    Json(input): Json<DevelopmentTimeRequest>,
) -> AppResult<Json<DevelopmentTime>> {
    let result = development::lookup(&input.film, &input.developer, input.iso)?;
    Ok(Json(result))
}
