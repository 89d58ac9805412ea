use crate::app::state::AppState;
use crate::view;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct IndexQuery {
    /// Flash token carried over from the preceding redirect
    flash: Option<u64>,
}

/// Handler for GET / — render the submission form. A pending flash message
/// is consumed here; reloading the page shows it gone.
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let flash = query.flash.and_then(|token| state.flash.take(token));
    Html(view::render_index(flash.as_ref()))
}
