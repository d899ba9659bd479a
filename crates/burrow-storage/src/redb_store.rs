use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use burrow_core::error::{Result, StoreError};
use burrow_core::link::LinkEntry;
use burrow_core::store::LinkStore;
use redb::{Database, ReadableTable, TableDefinition};

/// The single flat collection holding every key -> destination pair.
const LINKS: TableDefinition<&str, &str> = TableDefinition::new("links");

/// redb-backed implementation of the store contract.
///
/// redb commits each write transaction atomically and serializes
/// writers, while read transactions observe a consistent snapshot.
/// The blocking file I/O runs on the tokio blocking pool so request
/// workers never stall on disk.
///
/// The backing file is held until the last clone is dropped; the
/// process entry point owns that lifetime.
#[derive(Clone, Debug)]
pub struct RedbLinkStore {
    db: Arc<Database>,
}

impl RedbLinkStore {
    /// Opens or creates the backing file at `path` and ensures the
    /// links table exists.
    ///
    /// Fails with [`StoreError::Unavailable`] when the file cannot be
    /// created or is locked by another handle.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database::create(path).map_err(unavailable)?;

        // Opening the table inside a write transaction creates it on
        // first run; a no-op on every later open.
        let txn = db.begin_write().map_err(unavailable)?;
        {
            txn.open_table(LINKS).map_err(unavailable)?;
        }
        txn.commit().map_err(unavailable)?;

        Ok(Self { db: Arc::new(db) })
    }
}

fn unavailable(err: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

fn read_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::Read(err.to_string())
}

fn write_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::Write(err.to_string())
}

#[async_trait]
impl LinkStore for RedbLinkStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let db = Arc::clone(&self.db);
        let key = key.to_owned();
        tokio::task::spawn_blocking(move || -> Result<Option<String>> {
            let txn = db.begin_read().map_err(read_error)?;
            let table = txn.open_table(LINKS).map_err(read_error)?;
            let value = table.get(key.as_str()).map_err(read_error)?;
            Ok(value.map(|guard| guard.value().to_owned()))
        })
        .await
        .map_err(read_error)?
    }

    async fn put(&self, key: &str, destination: &str) -> Result<()> {
        let db = Arc::clone(&self.db);
        let key = key.to_owned();
        let destination = destination.to_owned();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let txn = db.begin_write().map_err(write_error)?;
            {
                let mut table = txn.open_table(LINKS).map_err(write_error)?;
                table
                    .insert(key.as_str(), destination.as_str())
                    .map_err(write_error)?;
            }
            txn.commit().map_err(write_error)
        })
        .await
        .map_err(write_error)?
    }

    async fn list(&self) -> Result<Vec<LinkEntry>> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || -> Result<Vec<LinkEntry>> {
            let txn = db.begin_read().map_err(read_error)?;
            let table = txn.open_table(LINKS).map_err(read_error)?;

            // redb iterates in ascending key order.
            let mut entries = Vec::new();
            for item in table.iter().map_err(read_error)? {
                let (key, destination) = item.map_err(read_error)?;
                entries.push(LinkEntry::new(key.value(), destination.value()));
            }
            Ok(entries)
        })
        .await
        .map_err(read_error)?
    }
}
