use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{page_handler, root_handler};
use crate::hook::record_request;
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the redirect router.
    ///
    /// The logging hook is attached per method router, so unmatched paths
    /// (404) and unsupported methods (405) are not recorded.
    pub fn router(state: AppState) -> Router {
        let hook = middleware::from_fn_with_state(state.clone(), record_request);

        Router::new()
            .route("/", get(root_handler).route_layer(hook.clone()))
            .route("/{page}", get(page_handler).route_layer(hook))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
