use std::future::Future;
use std::path::PathBuf;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    imaging::{entities::ImagingReport, value_objects::AnalyzeImageInput},
};

/// Holds an upload on disk for the length of one analysis.
#[cfg_attr(test, mockall::automock)]
pub trait ScratchFileStore: Send + Sync {
    /// Writes to the session's fixed scratch path, replacing any leftover.
    fn write(
        &self,
        session_id: Uuid,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<PathBuf, CoreError>> + Send;

    fn read(&self, path: PathBuf) -> impl Future<Output = Result<Vec<u8>, CoreError>> + Send;

    /// Succeeds when the file is already gone.
    fn remove(&self, path: PathBuf) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ImagingService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<ImagingReport, CoreError>> + Send;

    /// Resizes an upload to the display width and returns PNG bytes.
    fn preview_image(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, CoreError>> + Send;
}
