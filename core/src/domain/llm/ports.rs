use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::{ApiCredential, ImagePayload},
};

/// LLM Client trait for calling the hosted generative model.
///
/// Both methods return the model text verbatim. `Ok(None)` means the service
/// answered but produced no text.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        credential: ApiCredential,
        prompt: String,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn generate_with_image(
        &self,
        credential: ApiCredential,
        prompt: String,
        image: ImagePayload,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}
