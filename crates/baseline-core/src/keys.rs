use crate::identity::UserId;

const USER_PREFIX: &str = "USER#";
const EMAIL_PREFIX: &str = "EMAIL#";
const PROFILE_SORT: &str = "PROFILE";

/// Composite key addressing a single item in the single-table layout.
///
/// Items are grouped by `partition` and distinguished by `sort`, so related
/// records share a partition and targeted lookups never scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub partition: String,
    pub sort: String,
}

impl ItemKey {
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }

    /// Primary key of the profile item for a user: one profile per user,
    /// partition scoped by user.
    pub fn profile(user_id: &UserId) -> Self {
        Self::new(format!("{USER_PREFIX}{user_id}"), PROFILE_SORT)
    }

    /// Secondary index key enabling profile lookup by email. The sort
    /// component carries the user id so distinct users asserting the same
    /// email stay distinguishable.
    pub fn email_index(email: &str, user_id: &UserId) -> Self {
        Self::new(
            format!("{EMAIL_PREFIX}{email}"),
            format!("{USER_PREFIX}{user_id}"),
        )
    }

    /// Index partition for all items carrying a given email.
    pub fn email_partition(email: &str) -> String {
        format!("{EMAIL_PREFIX}{email}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_key_format() {
        let key = ItemKey::profile(&UserId::new("u1"));
        assert_eq!(key.partition, "USER#u1");
        assert_eq!(key.sort, "PROFILE");
    }

    #[test]
    fn email_index_key_format() {
        let key = ItemKey::email_index("a@x.com", &UserId::new("u1"));
        assert_eq!(key.partition, "EMAIL#a@x.com");
        assert_eq!(key.sort, "USER#u1");
    }

    #[test]
    fn email_partition_matches_index_key() {
        let key = ItemKey::email_index("a@x.com", &UserId::new("u1"));
        assert_eq!(ItemKey::email_partition("a@x.com"), key.partition);
    }
}
