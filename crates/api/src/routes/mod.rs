pub mod auth;
pub mod development;
pub mod health;
pub mod photos;
pub mod profile;
pub mod session;
pub mod settings;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth                          sign up (public)
/// /session                       log in (public)
///
/// /photos                        feed (optional auth), create (auth)
/// /photos/{id}                   get (optional auth), delete (owner)
/// /photos/{id}/like              toggle like (auth)
/// /photos/{id}/comments          list (public), add (auth), delete (author/owner)
///
/// /profile/{username}            public profile with photos and stats
/// /profile                       update bio / profile image (auth)
///
/// /settings                      update account fields (auth), delete account (auth)
///
/// /users/search                  public user search (?q=)
///
/// /development-time              static film development lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(session::router())
        .merge(photos::router())
        .merge(profile::router())
        .merge(settings::router())
        .merge(users::router())
        .merge(development::router())
}
