use crate::identity::UserId;
use crate::keys::ItemKey;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored profile record.
///
/// This is the full persisted state of a profile. Storage keys are derived
/// from the record ([`primary_key`], [`email_index_key`]) rather than stored
/// on it, so records handed to callers can never leak key internals.
///
/// [`primary_key`]: ProfileRecord::primary_key
/// [`email_index_key`]: ProfileRecord::email_index_key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub bio: String,
    pub avatar_url: String,
    /// Set on first creation, immutable thereafter.
    pub created_at: Timestamp,
    /// Set on every write.
    pub updated_at: Timestamp,
}

impl ProfileRecord {
    /// Primary key under which this record is stored.
    pub fn primary_key(&self) -> ItemKey {
        ItemKey::profile(&self.user_id)
    }

    /// Secondary index key projected from the current email. Recomputed on
    /// every write so the index always reflects the stored record.
    pub fn email_index_key(&self) -> ItemKey {
        ItemKey::email_index(&self.email, &self.user_id)
    }
}

/// Caller-supplied profile payload.
///
/// All fields deserialize to empty strings when absent; required-field
/// enforcement happens in [`missing_fields`] so the error can name every
/// offender at once. Unknown payload fields are ignored.
///
/// [`missing_fields`]: ProfileDraft::missing_fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl ProfileDraft {
    /// Wire names of required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.given_name.is_empty() {
            missing.push("givenName");
        }
        if self.family_name.is_empty() {
            missing.push("familyName");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_required_fields_is_complete() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"givenName": "Jane", "familyName": "Doe"}"#).unwrap();

        assert!(draft.missing_fields().is_empty());
        assert_eq!(draft.bio, "");
        assert_eq!(draft.avatar_url, "");
    }

    #[test]
    fn draft_names_missing_required_fields() {
        let draft: ProfileDraft = serde_json::from_str(r#"{"familyName": "Doe"}"#).unwrap();
        assert_eq!(draft.missing_fields(), vec!["givenName"]);

        let draft: ProfileDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.missing_fields(), vec!["givenName", "familyName"]);
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"givenName": "", "familyName": "Doe"}"#).unwrap();

        assert_eq!(draft.missing_fields(), vec!["givenName"]);
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        let draft: ProfileDraft = serde_json::from_str(
            r#"{"givenName": "Jane", "familyName": "Doe", "userId": "forged"}"#,
        )
        .unwrap();

        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let record = ProfileRecord {
            user_id: UserId::new("u1"),
            email: "a@x.com".to_string(),
            given_name: "Jane".to_string(),
            family_name: "Doe".to_string(),
            bio: String::new(),
            avatar_url: String::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["givenName"], "Jane");
        assert_eq!(json["familyName"], "Doe");
        assert_eq!(json["avatarUrl"], "");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
