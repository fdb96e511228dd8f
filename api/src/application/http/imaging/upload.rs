use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use healthsuite_core::domain::imaging::value_objects::MAX_IMAGE_SIZE;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const IMAGE_FIELD: &str = "image";

/// Body limit for upload routes; leaves room for the multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_SIZE + 1024 * 1024;

#[derive(Debug)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

fn multipart_error(error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ));
    }

    ApiError::BadRequest(format!("Failed to read multipart field: {}", error))
}

/// Pulls the `image` field out of a multipart body, ignoring any other field.
pub async fn read_image_field(mut multipart: Multipart) -> Result<ImageUpload, ApiError> {
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(|name| name.to_string());
        let data = field.bytes().await.map_err(multipart_error)?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        upload = Some(ImageUpload {
            file_name,
            data: data.to_vec(),
        });
    }

    upload.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))
}
