use crate::error::IdentityError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// The subject claim carrying the provider-assigned user identifier.
pub const SUBJECT_CLAIM: &str = "sub";
/// The claim carrying the email address asserted by the provider.
pub const EMAIL_CLAIM: &str = "email";

/// A verified claim map, as handed over by the token-verification layer.
///
/// Verification itself happens upstream; by the time a `ClaimSet` reaches
/// this crate its contents are trusted.
pub type ClaimSet = serde_json::Map<String, Value>;

/// Opaque, provider-assigned user identifier.
///
/// Never derived from caller-supplied payloads; the only way a `UserId`
/// enters the system is through [`Identity::from_claims`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The caller identity established by the upstream token verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    /// Empty when the provider asserted no email claim.
    pub email: String,
}

impl Identity {
    /// Extracts the caller identity from a verified claim map.
    ///
    /// The subject claim is mandatory: an absent, empty or non-string
    /// subject yields [`IdentityError::MissingSubjectClaim`]. The email
    /// claim is optional at this layer and passes through as an empty
    /// string when missing.
    pub fn from_claims(claims: &ClaimSet) -> Result<Self, IdentityError> {
        let user_id = match claims.get(SUBJECT_CLAIM) {
            Some(Value::String(sub)) if !sub.is_empty() => UserId::new(sub.clone()),
            _ => return Err(IdentityError::MissingSubjectClaim),
        };

        let email = match claims.get(EMAIL_CLAIM) {
            Some(Value::String(email)) => email.clone(),
            _ => String::new(),
        };

        Ok(Self { user_id, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(pairs: &[(&str, Value)]) -> ClaimSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn extracts_subject_and_email() {
        let claims = claims(&[("sub", json!("u1")), ("email", json!("a@x.com"))]);

        let identity = Identity::from_claims(&claims).unwrap();
        assert_eq!(identity.user_id.as_str(), "u1");
        assert_eq!(identity.email, "a@x.com");
    }

    #[test]
    fn missing_email_passes_through_as_empty() {
        let claims = claims(&[("sub", json!("u1"))]);

        let identity = Identity::from_claims(&claims).unwrap();
        assert_eq!(identity.email, "");
    }

    #[test]
    fn non_string_email_passes_through_as_empty() {
        let claims = claims(&[("sub", json!("u1")), ("email", json!(42))]);

        let identity = Identity::from_claims(&claims).unwrap();
        assert_eq!(identity.email, "");
    }

    #[test]
    fn missing_subject_fails() {
        let claims = claims(&[("email", json!("a@x.com"))]);

        let err = Identity::from_claims(&claims).unwrap_err();
        assert_eq!(err, IdentityError::MissingSubjectClaim);
    }

    #[test]
    fn empty_subject_fails() {
        let claims = claims(&[("sub", json!(""))]);

        let err = Identity::from_claims(&claims).unwrap_err();
        assert_eq!(err, IdentityError::MissingSubjectClaim);
    }

    #[test]
    fn non_string_subject_fails() {
        let claims = claims(&[("sub", json!(123))]);

        let err = Identity::from_claims(&claims).unwrap_err();
        assert_eq!(err, IdentityError::MissingSubjectClaim);
    }
}
