use super::handlers::{
    ask_question::{__path_ask_question, ask_question},
    generate_plans::{__path_generate_plans, generate_plans},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_plans, ask_question))]
pub struct PlannerApiDoc;

pub fn planner_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/plans",
                state.args.server.root_path
            ),
            post(generate_plans),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/questions",
                state.args.server.root_path
            ),
            post(ask_question),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
