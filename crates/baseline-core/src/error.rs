use thiserror::Error;

/// Errors surfaced by storage backends.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors raised while turning a verified claim map into an [`Identity`].
///
/// A missing subject is a trust-boundary failure: the upstream verifier is
/// supposed to guarantee the claim is present, so callers must treat this
/// as a server-side anomaly rather than user input.
///
/// [`Identity`]: crate::identity::Identity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("missing subject claim in verified claim set")]
    MissingSubjectClaim,
}

/// Errors surfaced by the profile service.
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    /// The payload is missing one or more required fields. Carries the
    /// wire names of every missing field.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("storage error: {0}")]
    Storage(String),
}
