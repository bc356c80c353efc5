//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness
//! GET    /health/ready          - Readiness (database)
//!
//! # Auth (acknowledgements only)
//! POST   /auth/signup           - 201 {"msg": ...}
//! POST   /auth/signin           - 200 {"msg": ...}
//!
//! # Users (bearer token)
//! GET    /users/me              - Current user (?field= for one field)
//! PATCH  /users                 - Edit profile
//!
//! # Bookmarks (bearer token)
//! GET    /bookmarks             - List own bookmarks, newest first
//! POST   /bookmarks             - Create
//! GET    /bookmarks/{id}        - Show
//! PATCH  /bookmarks/{id}        - Edit
//! DELETE /bookmarks/{id}        - Delete
//! ```

pub mod auth;
pub mod bookmarks;
pub mod users;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};

use crate::middleware::jwt_auth;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
}

/// Create the user routes router (unguarded; see [`routes`]).
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", patch(users::update))
        .route("/me", get(users::me))
}

/// Create the bookmark routes router (unguarded; see [`routes`]).
pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(bookmarks::list).post(bookmarks::create))
        .route(
            "/{id}",
            get(bookmarks::show)
                .patch(bookmarks::update)
                .delete(bookmarks::delete),
        )
}

/// Create all API routes, with bearer token validation on the guarded ones.
pub fn routes(state: &AppState) -> Router<AppState> {
    let guarded = Router::new()
        .nest("/users", user_routes())
        .nest("/bookmarks", bookmark_routes())
        .route_layer(from_fn_with_state(state.clone(), jwt_auth));

    Router::new().nest("/auth", auth_routes()).merge(guarded)
}
