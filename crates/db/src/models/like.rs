//! Like toggle result.
//!
//! The `likes` table itself is only ever checked for existence or
//! counted, so no row struct is needed; the toggle's outcome is the one
//! shape that crosses the repository boundary.

use serde::Serialize;

/// Result of a like toggle: the new liked-state and the authoritative
/// post-mutation counter, read back inside the toggle transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes: i32,
}
