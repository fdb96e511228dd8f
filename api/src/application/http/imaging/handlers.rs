pub mod analyze_image;
pub mod preview_image;
