use axum::{
    Extension,
    extract::{Multipart, State},
};
use healthsuite_core::domain::imaging::{
    entities::ImagingReport, ports::ImagingService, value_objects::AnalyzeImageInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        imaging::upload::read_image_field,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeImageResponse {
    pub data: ImagingReport,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "imaging",
    summary = "Analyze a medical image",
    description = "Sends the uploaded image with the radiology report prompt to Gemini and returns the markdown report. Accepts jpg, jpeg, png and dicom uploads up to 10MB in the `image` field.",
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, description = "Unsupported or undecodable image"),
        (status = 401, description = "Missing or rejected API key"),
        (status = 502, description = "Gemini could not be reached")
    ),
    params(
        ("session_id" = String, Path, description = "Session id"),
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let upload = read_image_field(multipart).await?;

    let report = state
        .service
        .analyze_image(AnalyzeImageInput {
            session_id: ctx.session_id,
            file_name: upload.file_name,
            image_data: upload.data,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: report }))
}
