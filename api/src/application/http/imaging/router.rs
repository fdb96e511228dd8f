use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    preview_image::{__path_preview_image, preview_image},
};
use super::upload::UPLOAD_BODY_LIMIT;
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, preview_image))]
pub struct ImagingApiDoc;

pub fn imaging_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/imaging/analyze",
                state.args.server.root_path
            ),
            post(analyze_image),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/imaging/preview",
                state.args.server.root_path
            ),
            post(preview_image),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
