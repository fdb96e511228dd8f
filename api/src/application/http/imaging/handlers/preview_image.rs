use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
};
use healthsuite_core::domain::imaging::ports::ImagingService;

use crate::application::http::{
    imaging::upload::read_image_field,
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    post,
    path = "/preview",
    tag = "imaging",
    summary = "Preview an upload",
    description = "Returns the uploaded image resized to 500px wide as PNG. No API key needed.",
    responses(
        (status = 200, content_type = "image/png", description = "Resized image"),
        (status = 400, description = "Undecodable image")
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
)]
pub async fn preview_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let upload = read_image_field(multipart).await?;

    let png = state.service.preview_image(upload.data).await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
