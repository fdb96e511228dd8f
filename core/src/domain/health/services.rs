use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::HealthStatus, ports::HealthCheckService},
    imaging::ports::ScratchFileStore,
    llm::ports::LLMClient,
    session::ports::SessionRepository,
};

impl<S, LLM, SF> HealthCheckService for Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        let active_sessions = self.session_repository.count().await?;

        Ok(HealthStatus {
            status: "ok".to_string(),
            active_sessions,
            model: self.model_name.clone(),
            has_default_credential: self.default_credential.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        imaging::ports::MockScratchFileStore,
        llm::{ports::MockLLMClient, value_objects::ApiCredential},
        session::ports::MockSessionRepository,
    };

    #[tokio::test]
    async fn test_health_reports_sessions_and_model() {
        let mut repository = MockSessionRepository::new();
        repository
            .expect_count()
            .returning(|| Box::pin(async { Ok(2) }));

        let service = Service::new(
            repository,
            MockLLMClient::new(),
            MockScratchFileStore::new(),
            Some(ApiCredential::parse("fallback").unwrap()),
            "gemini-2.0-flash-exp".to_string(),
        );

        let status = service.health().await.unwrap();
        assert_eq!(status.active_sessions, 2);
        assert_eq!(status.model, "gemini-2.0-flash-exp");
        assert!(status.has_default_credential);
    }
}
