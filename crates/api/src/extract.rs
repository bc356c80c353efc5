//! Request body extraction with validation.
//!
//! [`ValidatedBody`] accepts `application/json` and
//! `application/x-www-form-urlencoded` bodies, ignores unknown fields, and
//! runs [`Validate`] before the handler sees the value. Every failure is a
//! `400` with code `bad_request`.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Field-level checks that serde alone cannot express.
pub trait Validate {
    /// # Errors
    ///
    /// Returns a client-facing description of the first failed rule.
    fn validate(&self) -> Result<(), String>;
}

/// A deserialised, validated request body.
#[derive(Debug, Clone)]
pub struct ValidatedBody<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let value = if is_form {
            Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?
                .0
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?
                .0
        };

        value.validate().map_err(AppError::BadRequest)?;
        Ok(Self(value))
    }
}

/// Trim an optional text field, treating blank input as absent.
#[must_use]
pub fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Note {
        title: String,
    }

    impl Validate for Note {
        fn validate(&self) -> Result<(), String> {
            if self.title.trim().is_empty() {
                return Err("title cannot be empty".to_owned());
            }
            Ok(())
        }
    }

    fn request(content_type: &str, body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(req: Request) -> Result<Note, AppError> {
        ValidatedBody::<Note>::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn accepts_json_and_ignores_unknown_fields() {
        let note = extract(request(
            "application/json",
            r#"{"title":"hello","extra":true}"#,
        ))
        .await
        .unwrap();
        assert_eq!(note.title, "hello");
    }

    #[tokio::test]
    async fn accepts_form() {
        let note = extract(request(
            "application/x-www-form-urlencoded",
            "title=from+a+form",
        ))
        .await
        .unwrap();
        assert_eq!(note.title, "from a form");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = extract(request("application/json", "{not json"))
            .await
            .unwrap_err();
        assert_eq!(err.status().0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_validation_is_bad_request() {
        let err = extract(request("application/json", r#"{"title":"   "}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "title cannot be empty"));
    }

    #[test]
    fn trimmed_drops_blank() {
        assert_eq!(trimmed(Some("  hi ")), Some("hi".to_owned()));
        assert_eq!(trimmed(Some("   ")), None);
        assert_eq!(trimmed(None), None);
    }
}
