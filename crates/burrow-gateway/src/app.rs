use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_link_handler, create_page_handler, resolve_link_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        // No other static routes: each one would shadow a shortlink
        // key the way the reserved listing segment already does.
        Router::new()
            .route("/", get(create_page_handler).post(create_link_handler))
            .route("/{key}", get(resolve_link_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
