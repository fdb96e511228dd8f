use axum::{Extension, extract::State};
use healthsuite_core::domain::planner::{
    entities::PlanBundle, ports::PlannerService, value_objects::GeneratePlansInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        planner::validators::GeneratePlansValidator,
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
pub struct GeneratePlansResponse {
    pub data: PlanBundle,
}

#[utoipa::path(
    post,
    path = "/plans",
    tag = "planner",
    summary = "Generate dietary and fitness plans",
    description = "Asks Gemini for a dietary plan and a fitness plan for the profile. Replaces any previous plans and clears the question history.",
    responses(
        (status = 200, body = GeneratePlansResponse),
        (status = 400, description = "Profile out of range"),
        (status = 401, description = "Missing or rejected API key"),
        (status = 502, description = "Gemini could not be reached")
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
    request_body = GeneratePlansValidator
)]
pub async fn generate_plans(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<GeneratePlansValidator>,
) -> Result<Response<GeneratePlansResponse>, ApiError> {
    let plans = state
        .service
        .generate_plans(GeneratePlansInput {
            session_id: ctx.session_id,
            profile: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GeneratePlansResponse { data: plans }))
}
