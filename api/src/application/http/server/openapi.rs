use crate::application::http::{
    health::router::HealthApiDoc, imaging::router::ImagingApiDoc,
    planner::router::PlannerApiDoc, session::router::SessionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Health Suite API"
    ),
    nest(
        (path = "/sessions", api = SessionApiDoc),
        (path = "/sessions/{session_id}/imaging", api = ImagingApiDoc),
        (path = "/sessions/{session_id}", api = PlannerApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
