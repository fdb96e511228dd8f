use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    imaging::ports::ScratchFileStore,
    llm::{ports::LLMClient, value_objects::ApiCredential},
    session::{entities::Session, ports::SessionRepository},
};

/// Implements every service port. Generic over the adapters so tests can
/// swap any of them.
pub struct Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    pub(crate) session_repository: Arc<S>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) scratch_store: Arc<SF>,
    pub(crate) default_credential: Option<ApiCredential>,
    pub(crate) model_name: String,
}

impl<S, LLM, SF> Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    pub fn new(
        session_repository: S,
        llm_client: LLM,
        scratch_store: SF,
        default_credential: Option<ApiCredential>,
        model_name: String,
    ) -> Self {
        Self {
            session_repository: Arc::new(session_repository),
            llm_client: Arc::new(llm_client),
            scratch_store: Arc::new(scratch_store),
            default_credential,
            model_name,
        }
    }

    pub(crate) async fn load_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.session_repository
            .get(session_id)
            .await?
            .ok_or(CoreError::SessionNotFound)
    }

    /// The session key wins over the configured fallback. No key at all ends
    /// the operation here, before any other work.
    pub(crate) fn resolve_credential(&self, session: &Session) -> Result<ApiCredential, CoreError> {
        session
            .credential()
            .or(self.default_credential.as_ref())
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(session_id = %session.id, "no Gemini API key available");
                CoreError::MissingCredential
            })
    }
}

impl<S, LLM, SF> Clone for Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    fn clone(&self) -> Self {
        Self {
            session_repository: Arc::clone(&self.session_repository),
            llm_client: Arc::clone(&self.llm_client),
            scratch_store: Arc::clone(&self.scratch_store),
            default_credential: self.default_credential.clone(),
            model_name: self.model_name.clone(),
        }
    }
}
