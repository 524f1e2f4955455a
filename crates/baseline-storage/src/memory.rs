use async_trait::async_trait;
use baseline_core::store::Result;
use baseline_core::{ItemKey, ProfileRecord, ProfileStore, UserId};
use dashmap::DashMap;
use std::collections::BTreeMap;

/// In-memory implementation of [`ProfileStore`] using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
///
/// The email index holds full projected records keyed by index partition,
/// with entries ordered by index sort. It trails the primary copy: a `put`
/// updates the primary item first, then the projection, matching the
/// eventually-consistent index model.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: DashMap<ItemKey, ProfileRecord>,
    email_index: DashMap<String, BTreeMap<String, ProfileRecord>>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<ProfileRecord>> {
        let key = ItemKey::profile(user_id);
        Ok(self.items.get(&key).map(|record| record.clone()))
    }

    async fn put(&self, record: &ProfileRecord) -> Result<()> {
        let previous = self.items.insert(record.primary_key(), record.clone());

        // A changed email leaves a projection under the old partition;
        // drop it before installing the new one.
        if let Some(previous) = previous {
            if previous.email != record.email {
                let stale = previous.email_index_key();
                if let Some(mut bucket) = self.email_index.get_mut(&stale.partition) {
                    bucket.remove(&stale.sort);
                }
            }
        }

        let index_key = record.email_index_key();
        self.email_index
            .entry(index_key.partition)
            .or_default()
            .insert(index_key.sort, record.clone());

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ProfileRecord>> {
        let partition = ItemKey::email_partition(email);

        let Some(bucket) = self.email_index.get(&partition) else {
            return Ok(None);
        };

        Ok(bucket.values().next().cloned())
    }
}
