use axum::{extract::State, response::Html};

use crate::application::http::server::app_state::AppState;

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/index.html"));

const ROOT_PATH_PLACEHOLDER: &str = "{{ROOT_PATH}}";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.args.server.root_path))
}

fn render_index(root_path: &str) -> String {
    INDEX_HTML.replace(ROOT_PATH_PLACEHOLDER, root_path)
}
