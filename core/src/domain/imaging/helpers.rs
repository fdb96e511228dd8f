use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, Limits, imageops::FilterType};

use crate::domain::{
    common::entities::app_errors::CoreError,
    imaging::value_objects::{
        ACCEPTED_EXTENSIONS, MAX_DECODE_ALLOC, MAX_IMAGE_DIMENSION, MAX_IMAGE_SIZE,
        MAX_PREVIEW_HEIGHT,
    },
    llm::value_objects::ImagePayload,
};

/// Same acceptance rules as the upload widget: known extension, non-empty,
/// at most `MAX_IMAGE_SIZE` bytes.
pub fn check_upload(file_name: Option<&str>, data: &[u8]) -> Result<(), CoreError> {
    if let Some(file_name) = file_name {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension {
            Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(CoreError::InvalidInput(format!(
                    "Unsupported file type. Supported formats: {}",
                    ACCEPTED_EXTENSIONS.join(", ")
                )));
            }
        }
    }

    if data.is_empty() {
        return Err(CoreError::InvalidInput("Image cannot be empty".to_string()));
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(CoreError::InvalidInput(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(())
}

fn decode_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
    limits.max_image_height = Some(MAX_IMAGE_DIMENSION);
    limits.max_alloc = Some(MAX_DECODE_ALLOC);
    limits
}

fn decode(data: &[u8]) -> Result<DynamicImage, CoreError> {
    let undecodable = |e: &dyn std::fmt::Display| {
        tracing::warn!("Uploaded file is not a decodable image: {}", e);
        CoreError::InvalidInput(format!("Could not decode image: {}", e))
    };

    let mut reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| undecodable(&e))?;
    reader.limits(decode_limits());

    reader.decode().map_err(|e| undecodable(&e))
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, CoreError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).map_err(|e| {
        tracing::error!("Failed to encode PNG: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(buffer.into_inner())
}

/// Decodes the upload and prepares it for inlining.
///
/// PNG, JPEG and WebP go through untouched. Any other decodable raster format
/// is re-encoded as PNG.
pub fn decode_for_model(data: &[u8]) -> Result<ImagePayload, CoreError> {
    let image = decode(data)?;

    let mime_type = match image::guess_format(data) {
        Ok(ImageFormat::Png) => Some("image/png"),
        Ok(ImageFormat::Jpeg) => Some("image/jpeg"),
        Ok(ImageFormat::WebP) => Some("image/webp"),
        _ => None,
    };

    match mime_type {
        Some(mime_type) => Ok(ImagePayload {
            mime_type: mime_type.to_string(),
            data: data.to_vec(),
        }),
        None => Ok(ImagePayload {
            mime_type: "image/png".to_string(),
            data: encode_png(&image)?,
        }),
    }
}

/// Scales to `width` keeping the aspect ratio, returns PNG bytes.
///
/// Very tall images are fitted to `MAX_PREVIEW_HEIGHT` instead, so the
/// output never exceeds `width` x `MAX_PREVIEW_HEIGHT`.
pub fn resize_for_display(data: &[u8], width: u32) -> Result<Vec<u8>, CoreError> {
    let image = decode(data)?;

    let resized = image.resize(width, MAX_PREVIEW_HEIGHT, FilterType::CatmullRom);
    encode_png(&resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn sample(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let pixels = RgbImage::from_pixel(width, height, Rgb([12, 80, 200]));
        let image = DynamicImage::ImageRgb8(pixels);
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_check_upload_accepts_known_extensions() {
        let data = sample(4, 4, ImageFormat::Png);
        assert!(check_upload(Some("scan.PNG"), &data).is_ok());
        assert!(check_upload(Some("xray.jpeg"), &data).is_ok());
        assert!(check_upload(None, &data).is_ok());
    }

    #[test]
    fn test_check_upload_rejects_unknown_extension() {
        let data = sample(4, 4, ImageFormat::Png);
        let result = check_upload(Some("report.pdf"), &data);
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_check_upload_rejects_empty() {
        let result = check_upload(Some("scan.png"), &[]);
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_decode_for_model_keeps_png() {
        let data = sample(8, 6, ImageFormat::Png);
        let payload = decode_for_model(&data).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, data);
    }

    #[test]
    fn test_decode_for_model_reencodes_bmp() {
        let data = sample(8, 6, ImageFormat::Bmp);
        let payload = decode_for_model(&data).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(image::guess_format(&payload.data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_decode_for_model_rejects_garbage() {
        let result = decode_for_model(b"DICM not really an image");
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_check_upload_rejects_oversized() {
        let data = vec![0u8; MAX_IMAGE_SIZE + 1];
        let result = check_upload(Some("scan.png"), &data);
        assert!(matches!(
            result,
            Err(CoreError::InvalidInput(message)) if message.contains("too large")
        ));

        let at_limit = vec![0u8; MAX_IMAGE_SIZE];
        assert!(check_upload(Some("scan.png"), &at_limit).is_ok());
    }

    #[test]
    fn test_resize_for_display_bounds_tall_slivers() {
        let data = sample(1, 10_000, ImageFormat::Png);
        let preview = resize_for_display(&data, 500).unwrap();
        let decoded = image::load_from_memory(&preview).unwrap();
        assert!(decoded.width() <= 500);
        assert!(decoded.height() <= MAX_PREVIEW_HEIGHT);
    }

    #[test]
    fn test_decode_rejects_dimensions_over_limit() {
        let data = sample(1, MAX_IMAGE_DIMENSION + 1, ImageFormat::Png);
        assert!(matches!(
            resize_for_display(&data, 500),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            decode_for_model(&data),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resize_for_display_keeps_aspect_ratio() {
        let data = sample(1000, 400, ImageFormat::Png);
        let preview = resize_for_display(&data, 500).unwrap();
        let decoded = image::load_from_memory(&preview).unwrap();
        assert_eq!(decoded.width(), 500);
        assert_eq!(decoded.height(), 200);
    }
}
