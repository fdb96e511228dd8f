use axum::{Extension, extract::State};
use healthsuite_core::domain::session::ports::SessionService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSessionResponse {
    pub id: Uuid,
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "session",
    summary = "End a session",
    description = "Discards the session together with its plans, answers and API key.",
    responses(
        (status = 200, body = DeleteSessionResponse),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<Response<DeleteSessionResponse>, ApiError> {
    state.service.end_session(ctx.session_id).await?;

    Ok(Response::OK(DeleteSessionResponse {
        id: ctx.session_id,
        message: "Session ended".to_string(),
    }))
}
