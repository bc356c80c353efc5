//! HTTP middleware and request extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span)
//! 3. Request ID
//! 4. Bearer token validation (guarded routers only)

pub mod auth;
pub mod get_user;
pub mod request_id;

pub use auth::jwt_auth;
pub use get_user::{GetUser, GetUserId};
pub use request_id::request_id_middleware;
