use crate::error::ProfileError;
use crate::identity::{Identity, UserId};
use crate::profile::{ProfileDraft, ProfileRecord};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Profile read/write operations exposed to the HTTP layer.
#[async_trait]
pub trait ProfileManager: Send + Sync + 'static {
    /// Fetches the caller's own profile. `None` is a valid, expected state
    /// for an authenticated user who has not written a profile yet.
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<ProfileRecord>>;

    /// Creates or fully replaces the caller's profile. The stored identity
    /// always comes from `identity`, never from the draft.
    async fn put_profile(&self, identity: &Identity, draft: ProfileDraft)
        -> Result<ProfileRecord>;
}
