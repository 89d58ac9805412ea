use crate::app::state::AppState;
use crate::handler::index::index_handler;
use crate::handler::send_log::send_log_handler;
use axum::Router;
use axum::routing::{get, post};

/// Build the HTTP router: the form page and the submission endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/send-log", post(send_log_handler))
        .with_state(state)
}
