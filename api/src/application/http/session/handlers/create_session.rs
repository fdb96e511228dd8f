use axum::extract::State;
use healthsuite_core::domain::session::{ports::SessionService, value_objects::SessionView};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionResponse {
    pub data: SessionView,
}

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Start a session",
    description = "Creates an empty session: no plans, no questions, no API key.",
    responses(
        (status = 201, body = SessionResponse)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state.service.start_session().await?;

    Ok(Response::Created(SessionResponse {
        data: SessionView::from(session),
    }))
}
