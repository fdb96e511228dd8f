use axum::{Extension, extract::State};
use healthsuite_core::domain::session::{ports::SessionService, value_objects::SessionView};

use super::create_session::SessionResponse;
use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get a session",
    description = "Returns the current plans and question history of a session.",
    responses(
        (status = 200, body = SessionResponse),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state.service.get_session(ctx.session_id).await?;

    Ok(Response::OK(SessionResponse {
        data: SessionView::from(session),
    }))
}
