use uuid::Uuid;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "dicom"];

pub const PREVIEW_WIDTH: u32 = 500;

/// Previews are scaled to fit inside `PREVIEW_WIDTH` x `MAX_PREVIEW_HEIGHT`.
pub const MAX_PREVIEW_HEIGHT: u32 = 2000;

/// Largest width or height accepted when decoding an upload.
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

/// Decoder allocation cap.
pub const MAX_DECODE_ALLOC: u64 = 512 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub session_id: Uuid,
    pub file_name: Option<String>,
    pub image_data: Vec<u8>,
}
