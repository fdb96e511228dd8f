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
    delete,
    path = "/{session_id}/credential",
    tag = "session",
    summary = "Forget the Gemini API key",
    responses(
        (status = 200, body = SessionResponse)
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
)]
pub async fn clear_credential(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state.service.clear_credential(ctx.session_id).await?;

    Ok(Response::OK(SessionResponse {
        data: SessionView::from(session),
    }))
}
