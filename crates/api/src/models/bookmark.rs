//! Bookmark domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookmarks_core::{BookmarkId, BookmarkLink, UserId};

/// A saved link owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: String,
    pub description: Option<String>,
    pub link: BookmarkLink,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let now = Utc::now();
        let bookmark = Bookmark {
            id: BookmarkId::new(3),
            title: "Docs".to_owned(),
            description: None,
            link: BookmarkLink::parse("https://docs.rs").unwrap(),
            user_id: UserId::new(1),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["userId"], 1);
        assert_eq!(json["link"], "https://docs.rs/");
        assert!(json["description"].is_null());
        assert!(json.get("user_id").is_none());
    }
}
