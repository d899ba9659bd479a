use std::sync::Arc;

use async_trait::async_trait;
use burrow_core::error::Result;
use burrow_core::link::LinkEntry;
use burrow_core::store::{LinkStore, RESERVED_LISTING_KEY};
use tracing::{debug, trace};

/// Outcome of resolving a requested key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A stored destination, verbatim as written at registration time.
    Redirect(String),
    /// The full enumeration behind the reserved listing key.
    Listing(Vec<LinkEntry>),
    /// No link is registered under the key. An expected outcome, not
    /// an error; the boundary renders the creation page for it.
    NotFound,
}

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Translates a requested key into a redirect target, the listing
    /// view, or `NotFound`.
    async fn resolve(&self, key: &str) -> Result<Resolution>;
}

/// Service for the read path.
///
/// The reserved key bypasses single-key lookup and enumerates the whole
/// store instead, so a link registered under that exact name is
/// shadowed: visible in the listing, never followable as a redirect.
#[derive(Debug, Clone)]
pub struct ResolverService<S> {
    store: Arc<S>,
}

impl<S: LinkStore> ResolverService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: LinkStore> Resolver for ResolverService<S> {
    async fn resolve(&self, key: &str) -> Result<Resolution> {
        if key == RESERVED_LISTING_KEY {
            let entries = self.store.list().await?;
            debug!(count = entries.len(), "serving link listing");
            return Ok(Resolution::Listing(entries));
        }

        match self.store.get(key).await? {
            Some(destination) => {
                debug!(key = %key, destination = %destination, "resolved link");
                Ok(Resolution::Redirect(destination))
            }
            None => {
                trace!(key = %key, "link not found");
                Ok(Resolution::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_storage::InMemoryLinkStore;

    fn service_with_store() -> (Arc<InMemoryLinkStore>, ResolverService<InMemoryLinkStore>) {
        let store = Arc::new(InMemoryLinkStore::new());
        let service = ResolverService::new(Arc::clone(&store));
        (store, service)
    }

    #[tokio::test]
    async fn resolve_existing_key() {
        let (store, service) = service_with_store();
        store.put("go", "https://golang.org").await.unwrap();

        let resolution = service.resolve("go").await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Redirect("https://golang.org".to_owned())
        );
    }

    #[tokio::test]
    async fn resolve_missing_key() {
        let (_store, service) = service_with_store();

        let resolution = service.resolve("missing").await.unwrap();
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn reserved_key_lists_all_links() {
        let (store, service) = service_with_store();
        store.put("b", "https://y.example").await.unwrap();
        store.put("a", "https://x.example").await.unwrap();

        let resolution = service.resolve(RESERVED_LISTING_KEY).await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Listing(vec![
                LinkEntry::new("a", "https://x.example"),
                LinkEntry::new("b", "https://y.example"),
            ])
        );
    }

    #[tokio::test]
    async fn reserved_key_lists_even_on_empty_store() {
        let (_store, service) = service_with_store();

        let resolution = service.resolve(RESERVED_LISTING_KEY).await.unwrap();
        assert_eq!(resolution, Resolution::Listing(vec![]));
    }

    #[tokio::test]
    async fn stored_link_named_links_is_shadowed_by_the_listing() {
        let (store, service) = service_with_store();
        store
            .put(RESERVED_LISTING_KEY, "https://shadowed.example")
            .await
            .unwrap();

        // The entry exists and shows up in the listing, but the key
        // never resolves as a redirect.
        let resolution = service.resolve(RESERVED_LISTING_KEY).await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Listing(vec![LinkEntry::new(
                RESERVED_LISTING_KEY,
                "https://shadowed.example"
            )])
        );
    }
}
