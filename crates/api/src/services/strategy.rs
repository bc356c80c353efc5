//! Bearer token validation strategy.
//!
//! Given verified claims, load the user named by `sub` and strip the
//! password hash. A subject with no matching row is not an error: the
//! strategy yields `None` and the route guard decides what that means.

use crate::db::{RepositoryError, UserLookup};
use crate::models::{Claims, User};

pub struct JwtStrategy<L> {
    lookup: L,
}

impl<L: UserLookup> JwtStrategy<L> {
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve claims to the user they name.
    ///
    /// # Errors
    ///
    /// Only if the lookup itself fails.
    pub async fn validate(&self, claims: &Claims) -> Result<Option<User>, RepositoryError> {
        let record = self.lookup.find_user(claims.sub).await?;
        Ok(record.map(User::from))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use bookmarks_core::UserId;

    use super::*;
    use crate::models::UserRecord;
    use crate::models::user::tests::sample_record;

    struct MapLookup(HashMap<UserId, UserRecord>);

    impl UserLookup for MapLookup {
        async fn find_user(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
            Ok(self.0.get(&id).cloned())
        }
    }

    struct FailingLookup;

    impl UserLookup for FailingLookup {
        async fn find_user(&self, _id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn claims_for(id: i32) -> Claims {
        Claims {
            sub: UserId::new(id),
            email: "ann@example.com".to_owned(),
            iat: 0,
            exp: 0,
        }
    }

    fn strategy() -> JwtStrategy<MapLookup> {
        let record = sample_record();
        JwtStrategy::new(MapLookup(HashMap::from([(record.id, record)])))
    }

    #[tokio::test]
    async fn unmatched_subject_yields_no_user() {
        let user = strategy().validate(&claims_for(999)).await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn matched_subject_yields_user_without_hash() {
        let user = strategy().validate(&claims_for(7)).await.unwrap().unwrap();
        let expected = User::from(sample_record());

        assert_eq!(user.id, expected.id);
        assert_eq!(user.email, expected.email);
        assert_eq!(user.first_name, expected.first_name);

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("hash").is_none());
    }

    #[tokio::test]
    async fn lookup_failure_propagates() {
        let result = JwtStrategy::new(FailingLookup)
            .validate(&claims_for(7))
            .await;
        assert!(matches!(result, Err(RepositoryError::Database(_))));
    }
}
