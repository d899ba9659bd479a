use crate::error::Result;
use crate::link::LinkEntry;
use async_trait::async_trait;

/// Key that always resolves to the listing view instead of a redirect.
///
/// A link registered under this exact name is shadowed: it shows up
/// in the listing but is never followed.
pub const RESERVED_LISTING_KEY: &str = "links";

/// A durable key -> destination mapping with one flat collection.
///
/// Implementations serialize writers (each `put` commits atomically)
/// while readers proceed concurrently on a consistent snapshot.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Looks up the destination stored for `key`.
    /// Returns `None` if no link is registered under it.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes or overwrites the destination stored for `key`.
    async fn put(&self, key: &str, destination: &str) -> Result<()>;

    /// Enumerates every stored link, ascending by key.
    async fn list(&self) -> Result<Vec<LinkEntry>>;
}
