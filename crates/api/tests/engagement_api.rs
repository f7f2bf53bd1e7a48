//! HTTP-level integration tests for likes and comments, including the
//! denormalized-counter invariants.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_json_auth, get, post_auth, post_json_auth, token_for};
use sqlx::PgPool;

use argentic_core::types::DbId;
use argentic_db::models::photo::CreatePhoto;
use argentic_db::models::user::CreateUser;
use argentic_db::repositories::{CommentRepo, LikeRepo, PhotoRepo, UserRepo};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user directly in the database. Engagement tests authenticate
/// with generated tokens, so the stored hash is never verified.
async fn create_user(pool: &PgPool, username: &str) -> DbId {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: format!("{username}@test.com"),
            username: username.to_string(),
            first_name: username.to_string(),
            last_name: "Test".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            password_hash: "$argon2id$unverified".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");
    user.id
}

/// Create a photo owned by `user_id`, returning its id.
async fn create_photo(pool: &PgPool, user_id: DbId) -> DbId {
    let photo = PhotoRepo::create(
        pool,
        &CreatePhoto {
            url: "https://storage.test/rolls/tri-x-001.jpg".to_string(),
            title: Some("First frame off the roll".to_string()),
            user_id,
        },
    )
    .await
    .expect("photo creation should succeed");
    photo.id
}

/// Assert the photo's denormalized counters equal the actual row counts.
async fn assert_counters_consistent(pool: &PgPool, photo_id: DbId) {
    let photo = PhotoRepo::find_by_id(pool, photo_id)
        .await
        .unwrap()
        .expect("photo should exist");
    let like_rows = LikeRepo::count_for_photo(pool, photo_id).await.unwrap();
    let comment_rows = CommentRepo::count_for_photo(pool, photo_id).await.unwrap();
    assert_eq!(
        i64::from(photo.likes),
        like_rows,
        "likes counter must equal like row count"
    );
    assert_eq!(
        i64::from(photo.comments_count),
        comment_rows,
        "comments counter must equal comment row count"
    );
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

/// Toggling twice returns to the original state and counter (double-toggle
/// idempotence).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_double_toggle_returns_to_baseline(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let liker = create_user(&pool, "liker").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());
    let token = token_for(liker);

    let first = post_auth(app.clone(), &format!("/photos/{photo_id}/like"), &token).await;
    assert_eq!(first.status(), StatusCode::OK);
    let json = body_json(first).await;
    assert_eq!(json, serde_json::json!({ "liked": true, "likes": 1 }));

    let second = post_auth(app, &format!("/photos/{photo_id}/like"), &token).await;
    assert_eq!(second.status(), StatusCode::OK);
    let json = body_json(second).await;
    assert_eq!(json, serde_json::json!({ "liked": false, "likes": 0 }));

    assert_counters_consistent(&pool, photo_id).await;
}

/// The worked example: B likes, C likes, B unlikes. Final counter is 1
/// and exactly one like row (C's) survives.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_scenario_three_users(pool: PgPool) {
    let a = create_user(&pool, "usera").await;
    let b = create_user(&pool, "userb").await;
    let c = create_user(&pool, "userc").await;
    let photo_id = create_photo(&pool, a).await;
    let app = common::build_test_app(pool.clone());

    let uri = format!("/photos/{photo_id}/like");

    let r1 = body_json(post_auth(app.clone(), &uri, &token_for(b)).await).await;
    assert_eq!(r1, serde_json::json!({ "liked": true, "likes": 1 }));

    let r2 = body_json(post_auth(app.clone(), &uri, &token_for(c)).await).await;
    assert_eq!(r2, serde_json::json!({ "liked": true, "likes": 2 }));

    let r3 = body_json(post_auth(app, &uri, &token_for(b)).await).await;
    assert_eq!(r3, serde_json::json!({ "liked": false, "likes": 1 }));

    let remaining: Vec<DbId> =
        sqlx::query_scalar("SELECT user_id FROM likes WHERE photo_id = $1")
            .bind(photo_id)
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, vec![c], "only C's like row may survive");
    assert_counters_consistent(&pool, photo_id).await;
}

/// Toggling a like on a photo that does not exist is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_like_missing_photo(pool: PgPool) {
    let liker = create_user(&pool, "liker").await;
    let app = common::build_test_app(pool);

    let response = post_auth(app, "/photos/9999/like", &token_for(liker)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An unauthenticated like toggle is rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_like_requires_auth(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());

    let response = common::post_json(
        app,
        &format!("/photos/{photo_id}/like"),
        serde_json::json!({ "userId": owner }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count = LikeRepo::count_for_photo(&pool, photo_id).await.unwrap();
    assert_eq!(count, 0, "no like may be created without a principal");
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Adding a comment returns it joined with the author and bumps the
/// counter; deleting it restores the counter.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_add_and_delete_round_trip(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let commenter = create_user(&pool, "commenter").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());

    let uri = format!("/photos/{photo_id}/comments");

    let response = post_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "content": "nice shot" }),
        &token_for(commenter),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let comment = body_json(response).await;
    assert_eq!(comment["content"], "nice shot");
    assert_eq!(comment["user"]["username"], "commenter");
    let comment_id = comment["id"].as_i64().unwrap();

    assert_counters_consistent(&pool, photo_id).await;

    // The photo owner may moderate a comment they did not write.
    let response = delete_json_auth(
        app,
        &uri,
        serde_json::json!({ "commentId": comment_id }),
        &token_for(owner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));

    let count = CommentRepo::count_for_photo(&pool, photo_id).await.unwrap();
    assert_eq!(count, 0);
    assert_counters_consistent(&pool, photo_id).await;
}

/// An empty comment body is rejected before any mutation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_empty_content_rejected(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        &format!("/photos/{photo_id}/comments"),
        serde_json::json!({ "content": "   " }),
        &token_for(owner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_counters_consistent(&pool, photo_id).await;
}

/// Commenting on a photo that does not exist is a 404 and leaves nothing
/// behind.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_missing_photo(pool: PgPool) {
    let commenter = create_user(&pool, "commenter").await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/photos/9999/comments",
        serde_json::json!({ "content": "into the void" }),
        &token_for(commenter),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

/// A user who is neither the author nor the photo owner cannot delete a
/// comment, and the failed attempt changes nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_delete_unauthorized(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let author = create_user(&pool, "author").await;
    let bystander = create_user(&pool, "bystander").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());

    let comment = CommentRepo::create(&pool, photo_id, author, "mine")
        .await
        .unwrap()
        .expect("photo exists");

    let response = delete_json_auth(
        app,
        &format!("/photos/{photo_id}/comments"),
        serde_json::json!({ "commentId": comment.id }),
        &token_for(bystander),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let still_there = CommentRepo::find_by_id(&pool, comment.id).await.unwrap();
    assert!(still_there.is_some(), "comment must be untouched");
    assert_counters_consistent(&pool, photo_id).await;
}

/// Deleting a comment that does not exist is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_delete_missing(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool);

    let response = delete_json_auth(
        app,
        &format!("/photos/{photo_id}/comments"),
        serde_json::json!({ "commentId": 424242 }),
        &token_for(owner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Comments list newest-first with the author's public fields embedded.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_list_newest_first(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());

    for content in ["first", "second", "third"] {
        CommentRepo::create(&pool, photo_id, owner, content)
            .await
            .unwrap()
            .expect("photo exists");
    }

    let response = get(app, &format!("/photos/{photo_id}/comments")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let contents: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["third", "second", "first"]);
    assert_eq!(json[0]["user"]["username"], "owner");
}

// ---------------------------------------------------------------------------
// Photo cascade
// ---------------------------------------------------------------------------

/// Deleting a photo removes its likes and comments with it.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photo_delete_cascades_engagement(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let fan = create_user(&pool, "fan").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());

    LikeRepo::toggle(&pool, fan, photo_id).await.unwrap();
    CommentRepo::create(&pool, photo_id, fan, "keeper")
        .await
        .unwrap()
        .expect("photo exists");

    let response = common::delete_auth(app, &format!("/photos/{photo_id}"), &token_for(owner)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let likes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes")
        .fetch_one(&pool)
        .await
        .unwrap();
    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!((likes, comments), (0, 0), "no orphaned engagement rows");
}

/// Only the owner can delete a photo.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photo_delete_requires_owner(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let stranger = create_user(&pool, "stranger").await;
    let photo_id = create_photo(&pool, owner).await;
    let app = common::build_test_app(pool.clone());

    let response =
        common::delete_auth(app, &format!("/photos/{photo_id}"), &token_for(stranger)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let photo = PhotoRepo::find_by_id(&pool, photo_id).await.unwrap();
    assert!(photo.is_some(), "photo must be untouched");
}
