//! Core types and traits for the burrow link shortener.
//!
//! This crate provides the shared types and traits used by the
//! storage backends, the resolver/registrar services, and the
//! HTTP gateway.

pub mod error;
pub mod link;
pub mod store;

pub use error::StoreError;
pub use link::{normalize_destination, LinkEntry};
pub use store::{LinkStore, RESERVED_LISTING_KEY};
