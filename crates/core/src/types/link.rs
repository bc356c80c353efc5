//! Bookmark target URLs.

use core::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("link cannot be empty")]
    Empty,
    #[error("link must be at most {max} characters")]
    TooLong { max: usize },
    #[error("link is not a valid URL: {0}")]
    Invalid(String),
    #[error("link must use http or https (got {0})")]
    UnsupportedScheme(String),
    #[error("link must have a host")]
    MissingHost,
}

/// An absolute `http`/`https` URL a bookmark points at.
///
/// Stored in its `url`-normalised form, so `HTTPS://Example.com` is kept as
/// `https://example.com/`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BookmarkLink(String);

impl BookmarkLink {
    pub const MAX_LENGTH: usize = 2048;

    /// Parse and normalise a link.
    ///
    /// # Errors
    ///
    /// Returns a [`LinkError`] if the input is empty, too long, not a URL,
    /// not `http`/`https`, or has no host.
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(LinkError::Empty);
        }

        let url = Url::parse(s).map_err(|e| LinkError::Invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(LinkError::UnsupportedScheme(other.to_owned())),
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(LinkError::MissingHost);
        }

        // Measured after normalisation: percent-encoding can grow the input.
        if url.as_str().len() > Self::MAX_LENGTH {
            return Err(LinkError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(url.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BookmarkLink {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for BookmarkLink {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for BookmarkLink {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        // Only `parse` output is ever written, so the column is taken as-is.
        let raw = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(raw))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for BookmarkLink {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalises_scheme_and_host() {
        let link = BookmarkLink::parse("  HTTPS://Docs.RS  ").unwrap();
        assert_eq!(link.as_str(), "https://docs.rs/");
    }

    #[test]
    fn keeps_path_and_query() {
        let link = BookmarkLink::parse("https://example.com/a/b?q=1#frag").unwrap();
        assert_eq!(link.as_str(), "https://example.com/a/b?q=1#frag");
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_eq!(
            BookmarkLink::parse("ftp://example.com/file"),
            Err(LinkError::UnsupportedScheme("ftp".to_owned()))
        );
        assert!(matches!(
            BookmarkLink::parse("javascript:alert(1)"),
            Err(LinkError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn rejects_relative_and_empty() {
        assert_eq!(BookmarkLink::parse(""), Err(LinkError::Empty));
        assert!(matches!(
            BookmarkLink::parse("/just/a/path"),
            Err(LinkError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_overlong() {
        let long = format!("https://example.com/{}", "a".repeat(BookmarkLink::MAX_LENGTH));
        assert!(matches!(
            BookmarkLink::parse(&long),
            Err(LinkError::TooLong { .. })
        ));
    }

    #[test]
    fn length_limit_applies_to_stored_form() {
        // Each `é` becomes `%C3%A9` once normalised.
        let grows = format!("https://example.com/{}", "é".repeat(1000));
        assert!(grows.len() <= BookmarkLink::MAX_LENGTH);
        assert_eq!(
            BookmarkLink::parse(&grows),
            Err(LinkError::TooLong {
                max: BookmarkLink::MAX_LENGTH
            })
        );
    }

    #[test]
    fn stored_form_parses_back_unchanged() {
        let long = format!("https://example.com/{}", "é".repeat(300));
        for raw in [
            "HTTPS://Docs.RS",
            "https://example.com/caf\u{e9}?q=\u{fc}ber",
            long.as_str(),
        ] {
            let stored = BookmarkLink::parse(raw).unwrap();
            assert!(stored.as_str().len() <= BookmarkLink::MAX_LENGTH);
            assert_eq!(BookmarkLink::parse(stored.as_str()).unwrap(), stored);
        }
    }
}
