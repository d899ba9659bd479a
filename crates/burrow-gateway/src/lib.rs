//! HTTP boundary for the burrow link shortener.
//!
//! Translates requests into resolver/registrar calls and renders the
//! results: redirects, the creation page, the listing view, and error
//! responses.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
