use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use healthsuite_core::domain::session::ports::SessionService;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Live session resolved from the `{session_id}` path segment.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub session_id: Uuid,
}

/// Rejects requests for unknown sessions before any handler runs.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session_id = extract_session_from_path(req.uri().path())
        .ok_or_else(|| ApiError::BadRequest("Invalid session id".to_string()))?;

    let session = state.service.get_session(session_id).await?;

    req.extensions_mut().insert(SessionContext {
        session_id: session.id,
    });

    Ok(next.run(req).await)
}

fn extract_session_from_path(path: &str) -> Option<Uuid> {
    let mut segments = path.split('/');
    segments.find(|segment| *segment == "sessions")?;
    segments.next().and_then(|id| Uuid::parse_str(id).ok())
}
