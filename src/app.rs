use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;

// Posters are capped at 1 MB by the validation pipeline; the transport
// limit only guards against runaway request bodies, and must stay high
// enough that an oversized poster reaches the 400 path instead of being
// rejected mid-stream.
const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn create_app(state: AppState) -> Router {
    crate::routes::configure_routes()
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}
