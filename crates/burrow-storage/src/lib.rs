//! Storage backends for the burrow link shortener.
//!
//! [`RedbLinkStore`] is the durable production backend: one redb file,
//! one table. [`InMemoryLinkStore`] backs tests and local development.

pub mod memory;
pub mod redb_store;

pub use memory::InMemoryLinkStore;
pub use redb_store::RedbLinkStore;
