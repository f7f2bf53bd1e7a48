//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Serializable projections for API responses (camelCase keys; the
//!   `User` row itself carries the password hash and is never serialized)

pub mod comment;
pub mod like;
pub mod photo;
pub mod user;
