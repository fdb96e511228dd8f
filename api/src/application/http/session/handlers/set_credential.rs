use axum::{Extension, extract::State};
use healthsuite_core::domain::session::{ports::SessionService, value_objects::SessionView};

use super::create_session::SessionResponse;
use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        session::validators::SetCredentialValidator,
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    put,
    path = "/{session_id}/credential",
    tag = "session",
    summary = "Set the Gemini API key",
    description = "Stores the key on the session. It is never returned by the API.",
    responses(
        (status = 200, body = SessionResponse),
        (status = 401, description = "Blank key")
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
    request_body = SetCredentialValidator
)]
pub async fn set_credential(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<SetCredentialValidator>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .set_credential(ctx.session_id, payload.api_key)
        .await?;

    Ok(Response::OK(SessionResponse {
        data: SessionView::from(session),
    }))
}
