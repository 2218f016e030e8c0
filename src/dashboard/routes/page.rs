//! Page Route
//!
//! - GET / - The dashboard page

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::dashboard::error::DashboardError;
use crate::dashboard::state::AppState;

/// GET /
///
/// Serve the page rendered at startup.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page_html.to_string())
}

/// Fallback for unknown paths
pub async fn not_found(uri: axum::http::Uri) -> DashboardError {
    DashboardError::NotFound(uri.path().to_string())
}
