use async_trait::async_trait;
use baseline_core::manager::Result;
use baseline_core::{
    Identity, ProfileDraft, ProfileError, ProfileManager, ProfileRecord, ProfileStore,
    StorageError, UserId,
};
use jiff::Timestamp;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the `ProfileManager` trait.
///
/// This service wraps a `ProfileStore` and handles:
/// - Required-field validation, before any store round trip
/// - Identity binding: the stored `userId` and `email` always come from the
///   verified identity, never from the payload
/// - Timestamp discipline: `updatedAt` stamped on every write, `createdAt`
///   carried forward from the existing record so it survives updates
///
/// Writes are full replaces with last-writer-wins resolution; the store's
/// per-item write atomicity is the only concurrency guarantee relied on.
#[derive(Debug, Clone)]
pub struct ProfileService<S> {
    store: Arc<S>,
}

impl<S: ProfileStore> ProfileService<S> {
    /// Creates a new `ProfileService` over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl<S: ProfileStore> ProfileManager for ProfileService<S> {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<ProfileRecord>> {
        trace!(user_id = %user_id, "fetching profile");

        self.store
            .get(user_id)
            .await
            .map_err(storage_to_profile_error)
    }

    async fn put_profile(
        &self,
        identity: &Identity,
        draft: ProfileDraft,
    ) -> Result<ProfileRecord> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(ProfileError::MissingFields(missing));
        }

        let now = Timestamp::now();

        // Full replace, except createdAt: the first write stamps it and
        // every later write carries it forward.
        let existing = self
            .store
            .get(&identity.user_id)
            .await
            .map_err(storage_to_profile_error)?;
        let created_at = match existing {
            Some(previous) => previous.created_at,
            None => now,
        };

        let record = ProfileRecord {
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            given_name: draft.given_name,
            family_name: draft.family_name,
            bio: draft.bio,
            avatar_url: draft.avatar_url,
            created_at,
            updated_at: now,
        };

        self.store
            .put(&record)
            .await
            .map_err(storage_to_profile_error)?;

        debug!(user_id = %identity.user_id, "profile saved");
        Ok(record)
    }
}

/// Converts a StorageError to a ProfileError.
fn storage_to_profile_error(e: StorageError) -> ProfileError {
    ProfileError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseline_storage::InMemoryStore;

    fn test_service() -> ProfileService<InMemoryStore> {
        ProfileService::new(InMemoryStore::new())
    }

    fn identity(user_id: &str, email: &str) -> Identity {
        Identity {
            user_id: UserId::new(user_id),
            email: email.to_string(),
        }
    }

    fn draft(given_name: &str, family_name: &str) -> ProfileDraft {
        ProfileDraft {
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            ..ProfileDraft::default()
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trip() {
        let service = test_service();
        let id = identity("u1", "a@x.com");

        service.put_profile(&id, draft("Jane", "Doe")).await.unwrap();

        let got = service.get_profile(&id.user_id).await.unwrap().unwrap();
        assert_eq!(got.user_id.as_str(), "u1");
        assert_eq!(got.email, "a@x.com");
        assert_eq!(got.given_name, "Jane");
        assert_eq!(got.family_name, "Doe");
        assert_eq!(got.bio, "");
        assert_eq!(got.avatar_url, "");
    }

    #[tokio::test]
    async fn get_without_prior_write_returns_none() {
        let service = test_service();

        let got = service.get_profile(&UserId::new("u1")).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn identical_puts_differ_only_in_updated_at() {
        let service = test_service();
        let id = identity("u1", "a@x.com");

        let first = service.put_profile(&id, draft("Jane", "Doe")).await.unwrap();
        let second = service.put_profile(&id, draft("Jane", "Doe")).await.unwrap();

        assert_eq!(second.user_id, first.user_id);
        assert_eq!(second.email, first.email);
        assert_eq!(second.given_name, first.given_name);
        assert_eq!(second.family_name, first.family_name);
        assert_eq!(second.bio, first.bio);
        assert_eq!(second.avatar_url, first.avatar_url);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn created_at_survives_updates() {
        let service = test_service();
        let id = identity("u1", "a@x.com");

        let first = service.put_profile(&id, draft("Jane", "Doe")).await.unwrap();
        let second = service
            .put_profile(&id, draft("Janet", "Smith"))
            .await
            .unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.given_name, "Janet");

        let stored = service.get_profile(&id.user_id).await.unwrap().unwrap();
        assert_eq!(stored.created_at, first.created_at);
    }

    #[tokio::test]
    async fn update_clears_omitted_optional_fields() {
        let service = test_service();
        let id = identity("u1", "a@x.com");

        let with_bio = ProfileDraft {
            bio: "hello".to_string(),
            ..draft("Jane", "Doe")
        };
        service.put_profile(&id, with_bio).await.unwrap();
        service.put_profile(&id, draft("Jane", "Doe")).await.unwrap();

        let stored = service.get_profile(&id.user_id).await.unwrap().unwrap();
        assert_eq!(stored.bio, "");
    }

    #[tokio::test]
    async fn missing_given_name_fails_and_writes_nothing() {
        let service = test_service();
        let id = identity("u1", "a@x.com");

        let err = service.put_profile(&id, draft("", "Doe")).await.unwrap_err();
        assert!(matches!(
            &err,
            ProfileError::MissingFields(fields) if fields == &vec!["givenName"]
        ));

        let got = service.get_profile(&id.user_id).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn missing_both_required_fields_names_both() {
        let service = test_service();
        let id = identity("u1", "a@x.com");

        let err = service
            .put_profile(&id, ProfileDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(
            &err,
            ProfileError::MissingFields(fields) if fields == &vec!["givenName", "familyName"]
        ));
    }

    #[tokio::test]
    async fn empty_email_identity_still_writes() {
        let service = test_service();
        let id = identity("u1", "");

        let saved = service.put_profile(&id, draft("Jane", "Doe")).await.unwrap();
        assert_eq!(saved.email, "");
    }

    #[tokio::test]
    async fn email_follows_identity_on_update() {
        let service = test_service();

        service
            .put_profile(&identity("u1", "old@x.com"), draft("Jane", "Doe"))
            .await
            .unwrap();
        service
            .put_profile(&identity("u1", "new@x.com"), draft("Jane", "Doe"))
            .await
            .unwrap();

        let stored = service
            .get_profile(&UserId::new("u1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.email, "new@x.com");
    }
}
