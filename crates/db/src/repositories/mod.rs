//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Operations that touch a row
//! together with a denormalized counter run inside a single transaction.

pub mod comment_repo;
pub mod like_repo;
pub mod photo_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use like_repo::LikeRepo;
pub use photo_repo::PhotoRepo;
pub use user_repo::UserRepo;
