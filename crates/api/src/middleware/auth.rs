//! Bearer token authentication middleware.
//!
//! Applied to guarded routers with `axum::middleware::from_fn_with_state`.
//! A missing or unverifiable token is rejected with `401`. A verified token
//! whose subject no longer exists passes through with no user attached; the
//! [`GetUser`](super::GetUser) guard turns that into `401` for the handler.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::Span;

use crate::db::UserRepository;
use crate::error::{AppError, set_sentry_user};
use crate::services::JwtStrategy;
use crate::state::AppState;

/// Extract the token from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively; an empty token is treated as
/// absent.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Verify the bearer token and attach the user it names.
///
/// # Errors
///
/// `401` for a missing, malformed, forged or expired token; `500` if the
/// user lookup fails.
pub async fn jwt_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_owned()))?;
    let claims = state.tokens().decode(token)?;

    let strategy = JwtStrategy::new(UserRepository::new(state.pool()));
    match strategy.validate(&claims).await? {
        Some(user) => {
            Span::current().record("user_id", user.id.get());
            set_sentry_user(&user.id, Some(user.email.as_str()));
            request.extensions_mut().insert(user);
        }
        None => {
            tracing::debug!(sub = %claims.sub, "token subject has no matching user");
        }
    }

    Ok(next.run(request).await)
}
