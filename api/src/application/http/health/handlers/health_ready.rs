use axum::extract::State;
use healthsuite_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Reports the configured model and how many sessions are live.",
    responses(
        (status = 200, body = HealthStatus)
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<HealthStatus>, ApiError> {
    let status = state.service.health().await?;

    Ok(Response::OK(status))
}
