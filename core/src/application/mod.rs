use tracing::info;

use crate::{
    domain::{
        common::{HealthSuiteConfig, services::Service},
        llm::value_objects::ApiCredential,
    },
    infrastructure::{
        llm::GeminiLLMClient, scratch::FsScratchFileStore, session::InMemorySessionRepository,
    },
};

pub type HealthSuiteService =
    Service<InMemorySessionRepository, GeminiLLMClient, FsScratchFileStore>;

pub async fn create_service(
    config: HealthSuiteConfig,
) -> Result<HealthSuiteService, anyhow::Error> {
    tokio::fs::create_dir_all(&config.imaging.scratch_dir).await?;

    let llm_client = GeminiLLMClient::new(config.llm.gemini_base_url, config.llm.gemini_model);
    let model_name = llm_client.model_name().to_string();

    // A blank configured key counts as no key at all
    let default_credential = config
        .llm
        .gemini_api_key
        .and_then(|key| ApiCredential::parse(key).ok());

    info!(
        model = %model_name,
        scratch_dir = %config.imaging.scratch_dir.display(),
        default_credential = default_credential.is_some(),
        "Health suite service initialized"
    );

    Ok(Service::new(
        InMemorySessionRepository::new(),
        llm_client,
        FsScratchFileStore::new(config.imaging.scratch_dir),
        default_credential,
        model_name,
    ))
}
