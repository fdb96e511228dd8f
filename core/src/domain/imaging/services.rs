use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    imaging::{
        entities::ImagingReport,
        helpers::{check_upload, decode_for_model, resize_for_display},
        ports::{ImagingService, ScratchFileStore},
        prompt::MEDICAL_IMAGING_PROMPT,
        value_objects::{AnalyzeImageInput, PREVIEW_WIDTH},
    },
    llm::{
        ports::LLMClient,
        value_objects::{ApiCredential, ImagePayload},
    },
    session::ports::SessionRepository,
};

async fn run_blocking<T, F>(f: F) -> Result<T, CoreError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("Image task failed: {}", e);
        CoreError::InternalServerError
    })?
}

impl<S, LLM, SF> Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    async fn analyze_scratch_file(
        &self,
        credential: ApiCredential,
        path: std::path::PathBuf,
    ) -> Result<Option<String>, CoreError> {
        let data = self.scratch_store.read(path).await?;
        let payload: ImagePayload = run_blocking(move || decode_for_model(&data)).await?;

        self.llm_client
            .generate_with_image(credential, MEDICAL_IMAGING_PROMPT.to_string(), payload)
            .await
    }
}

impl<S, LLM, SF> ImagingService for Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    #[instrument(
        skip(self, input),
        fields(session_id = %input.session_id, size = input.image_data.len())
    )]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<ImagingReport, CoreError> {
        // 1. Credential first
        let session = self.load_session(input.session_id).await?;
        let credential = self.resolve_credential(&session)?;

        // 2. Upload rules
        check_upload(input.file_name.as_deref(), &input.image_data)?;

        // 3. Scratch file lives exactly as long as the model call
        let path = self
            .scratch_store
            .write(input.session_id, input.image_data)
            .await?;

        let outcome = self.analyze_scratch_file(credential, path.clone()).await;

        if let Err(e) = self.scratch_store.remove(path.clone()).await {
            warn!(path = %path.display(), "Failed to remove scratch image: {}", e);
        }

        let text = outcome?;
        info!("Image analysis completed");

        Ok(ImagingReport::new(text, self.model_name.clone()))
    }

    async fn preview_image(&self, image_data: Vec<u8>) -> Result<Vec<u8>, CoreError> {
        check_upload(None, &image_data)?;
        run_blocking(move || resize_for_display(&image_data, PREVIEW_WIDTH)).await
    }
}
