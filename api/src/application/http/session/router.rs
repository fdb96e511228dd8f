use super::handlers::clear_credential::{__path_clear_credential, clear_credential};
use super::handlers::create_session::{__path_create_session, create_session};
use super::handlers::delete_session::{__path_delete_session, delete_session};
use super::handlers::get_session::{__path_get_session, get_session};
use super::handlers::set_credential::{__path_set_credential, set_credential};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_session,
    get_session,
    delete_session,
    set_credential,
    clear_credential
))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    let scoped = Router::new()
        .route(
            &format!("{}/sessions/{{session_id}}", state.args.server.root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/credential",
                state.args.server.root_path
            ),
            put(set_credential).delete(clear_credential),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .route(
            &format!("{}/sessions", state.args.server.root_path),
            post(create_session),
        )
        .merge(scoped)
}
