pub mod links;
pub mod pages;

pub use links::{create_link_handler, resolve_link_handler};
pub use pages::create_page_handler;
