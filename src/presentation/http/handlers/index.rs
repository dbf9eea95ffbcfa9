//! Landing page.

use axum::extract::State;
use axum::response::Html;
use tracing::debug;

use crate::presentation::http::AppState;

const FALLBACK_INDEX: &str = include_str!("../../../../assets/index.html");

/// Serves `static_dir/index.html`, or the built-in page when it is missing.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&page).await {
        Ok(html) => Html(html),
        Err(e) => {
            debug!(path = %page.display(), error = %e, "Serving built-in index page");
            Html(FALLBACK_INDEX.to_string())
        }
    }
}
