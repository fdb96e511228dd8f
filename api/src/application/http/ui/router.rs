use super::handlers::index::index;
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};

pub fn ui_routes(root_path: &str) -> Router<AppState> {
    let index_path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new().route(&index_path, get(index))
}
