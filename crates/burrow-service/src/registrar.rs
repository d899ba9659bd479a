use std::sync::Arc;

use async_trait::async_trait;
use burrow_core::link::normalize_destination;
use burrow_core::store::LinkStore;
use tracing::debug;

use crate::error::RegisterError;

type Result<T> = std::result::Result<T, RegisterError>;

/// Confirmation of a successful registration: the key and the final
/// stored destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub key: String,
    pub destination: String,
}

#[async_trait]
pub trait Registrar: Send + Sync + 'static {
    /// Validates and persists a key -> destination pair, returning the
    /// stored form.
    async fn register(&self, key: &str, raw_destination: &str) -> Result<Registration>;
}

/// Service for the write path.
///
/// Registering an existing key overwrites its destination: last write
/// wins, no versioning.
#[derive(Debug, Clone)]
pub struct RegistrarService<S> {
    store: Arc<S>,
}

impl<S: LinkStore> RegistrarService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: LinkStore> Registrar for RegistrarService<S> {
    async fn register(&self, key: &str, raw_destination: &str) -> Result<Registration> {
        // Emptiness is checked on the raw inputs, before normalization
        // can pad an empty destination into "https://".
        if key.is_empty() {
            return Err(RegisterError::EmptyKey);
        }
        if raw_destination.is_empty() {
            return Err(RegisterError::EmptyDestination);
        }

        let destination = normalize_destination(raw_destination);
        self.store.put(key, &destination).await?;

        debug!(key = %key, destination = %destination, "registered link");

        Ok(Registration {
            key: key.to_owned(),
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Resolution, Resolver, ResolverService};
    use burrow_storage::InMemoryLinkStore;

    fn service_with_store() -> (Arc<InMemoryLinkStore>, RegistrarService<InMemoryLinkStore>) {
        let store = Arc::new(InMemoryLinkStore::new());
        let service = RegistrarService::new(Arc::clone(&store));
        (store, service)
    }

    #[tokio::test]
    async fn register_normalizes_bare_host() {
        let (store, service) = service_with_store();

        let registration = service.register("go", "golang.org").await.unwrap();

        assert_eq!(registration.key, "go");
        assert_eq!(registration.destination, "https://golang.org");
        assert_eq!(
            store.get("go").await.unwrap().as_deref(),
            Some("https://golang.org")
        );
    }

    #[tokio::test]
    async fn register_keeps_schemed_destination() {
        let (store, service) = service_with_store();

        let registration = service
            .register("ietf", "http://www.ietf.org")
            .await
            .unwrap();

        assert_eq!(registration.destination, "http://www.ietf.org");
        assert_eq!(
            store.get("ietf").await.unwrap().as_deref(),
            Some("http://www.ietf.org")
        );
    }

    #[tokio::test]
    async fn empty_key_is_rejected_without_a_write() {
        let (store, service) = service_with_store();

        let err = service.register("", "https://x.com").await.unwrap_err();

        assert!(matches!(err, RegisterError::EmptyKey));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_destination_is_rejected_without_a_write() {
        let (store, service) = service_with_store();

        let err = service.register("a", "").await.unwrap_err();

        assert!(matches!(err, RegisterError::EmptyDestination));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reregistering_a_key_overwrites_its_destination() {
        let (store, service) = service_with_store();

        service.register("go", "https://old.example").await.unwrap();
        service.register("go", "https://new.example").await.unwrap();

        assert_eq!(
            store.get("go").await.unwrap().as_deref(),
            Some("https://new.example")
        );
    }

    #[tokio::test]
    async fn registered_links_resolve_to_their_normalized_form() {
        let store = Arc::new(InMemoryLinkStore::new());
        let registrar = RegistrarService::new(Arc::clone(&store));
        let resolver = ResolverService::new(Arc::clone(&store));

        registrar.register("go", "golang.org").await.unwrap();

        let resolution = resolver.resolve("go").await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Redirect("https://golang.org".to_owned())
        );

        let missing = resolver.resolve("missing").await.unwrap();
        assert_eq!(missing, Resolution::NotFound);
    }
}
