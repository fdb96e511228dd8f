use axum::{Extension, extract::State};
use healthsuite_core::domain::planner::{
    entities::QaPair, ports::PlannerService, value_objects::AskQuestionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        planner::validators::AskQuestionValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AskQuestionResponse {
    pub data: QaPair,
}

#[utoipa::path(
    post,
    path = "/questions",
    tag = "planner",
    summary = "Ask about your plans",
    description = "Answers a follow-up question using the session's current plans as context and appends it to the history.",
    responses(
        (status = 200, body = AskQuestionResponse),
        (status = 400, description = "Blank question"),
        (status = 401, description = "Missing or rejected API key"),
        (status = 409, description = "No plans generated yet"),
        (status = 502, description = "Gemini could not be reached")
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
    request_body = AskQuestionValidator
)]
pub async fn ask_question(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<AskQuestionValidator>,
) -> Result<Response<AskQuestionResponse>, ApiError> {
    let pair = state
        .service
        .ask_question(AskQuestionInput {
            session_id: ctx.session_id,
            question: payload.question,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AskQuestionResponse { data: pair }))
}
