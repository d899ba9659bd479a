use async_trait::async_trait;
use burrow_core::error::Result;
use burrow_core::link::LinkEntry;
use burrow_core::store::LinkStore;
use dashmap::DashMap;

/// In-memory implementation of the store contract using DashMap.
///
/// Nothing is persisted; this backend exists for tests and local
/// development. DashMap's sharded locks let readers and writers on
/// different keys proceed without a global lock.
#[derive(Debug, Clone)]
pub struct InMemoryLinkStore {
    links: DashMap<String, String>,
}

impl InMemoryLinkStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

impl Default for InMemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.links.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, destination: &str) -> Result<()> {
        self.links.insert(key.to_owned(), destination.to_owned());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<LinkEntry>> {
        let mut entries: Vec<LinkEntry> = self
            .links
            .iter()
            .map(|entry| LinkEntry::new(entry.key().clone(), entry.value().clone()))
            .collect();

        // DashMap iteration is unordered; the listing contract is
        // ascending by key, same as the durable store.
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }
}
