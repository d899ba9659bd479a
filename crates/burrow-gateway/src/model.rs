pub mod link;

pub use link::{CreateLinkForm, LinkListResponse};
