//! Resolver and registrar services for the burrow link shortener.
//!
//! The read path ([`Resolver`]) turns a requested key into a redirect
//! target, the listing view, or a not-found signal. The write path
//! ([`Registrar`]) validates and persists key -> destination pairs.
//! Both sit between the HTTP gateway and a [`burrow_core::LinkStore`].

pub mod error;
pub mod registrar;
pub mod resolver;

pub use error::RegisterError;
pub use registrar::{Registrar, RegistrarService, Registration};
pub use resolver::{Resolution, Resolver, ResolverService};
