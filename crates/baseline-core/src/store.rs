use crate::error::StorageError;
use crate::identity::UserId;
use crate::profile::ProfileRecord;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value persistence for profile records.
///
/// Backends store one item per profile under the composite primary key and
/// maintain a denormalized email-index projection of the same record. The
/// projection is computed from the record inside a single `put`, never
/// written as a separate step, because backends are only required to make
/// individual item writes atomic.
#[async_trait]
pub trait ProfileStore: Send + Sync + 'static {
    /// Retrieves the profile stored under the user's primary key.
    /// Returns `None` if no profile exists for the user.
    async fn get(&self, user_id: &UserId) -> Result<Option<ProfileRecord>>;

    /// Writes the full record, replacing any prior item under the same
    /// primary key. The email-index projection is re-embedded in the same
    /// atomic write.
    async fn put(&self, record: &ProfileRecord) -> Result<()>;

    /// Looks up a profile through the email index. Returns the first item
    /// in index-sort order when several users assert the same email.
    ///
    /// The index is an eventually-consistent projection; no HTTP endpoint
    /// exercises this path today, but downstream consumers rely on the
    /// two-key-path layout.
    async fn find_by_email(&self, email: &str) -> Result<Option<ProfileRecord>>;
}
