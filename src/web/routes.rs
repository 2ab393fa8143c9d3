//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::preview_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Preview page
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(preview_handler))
}
