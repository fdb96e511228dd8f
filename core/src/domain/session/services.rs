use std::time::Duration;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    imaging::ports::ScratchFileStore,
    llm::{ports::LLMClient, value_objects::ApiCredential},
    session::{
        entities::Session,
        ports::{SessionRepository, SessionService},
    },
};

impl<S, LLM, SF> SessionService for Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    async fn start_session(&self) -> Result<Session, CoreError> {
        let session = self.session_repository.create(Session::new()).await?;
        info!(session_id = %session.id, "session started");
        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.load_session(session_id).await
    }

    #[instrument(skip(self, api_key))]
    async fn set_credential(
        &self,
        session_id: Uuid,
        api_key: String,
    ) -> Result<Session, CoreError> {
        let credential = ApiCredential::parse(api_key)?;

        self.session_repository
            .set_credential(session_id, Some(credential))
            .await
    }

    async fn clear_credential(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.session_repository
            .set_credential(session_id, None)
            .await
    }

    async fn end_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        if !self.session_repository.delete(session_id).await? {
            return Err(CoreError::SessionNotFound);
        }

        info!(session_id = %session_id, "session ended");
        Ok(())
    }

    async fn purge_idle_sessions(&self, ttl: Duration) -> Result<usize, CoreError> {
        let purged = self.session_repository.purge_idle(ttl).await?;

        if purged > 0 {
            info!(purged, "purged idle sessions");
        }

        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            imaging::ports::MockScratchFileStore, llm::ports::MockLLMClient,
            session::ports::MockSessionRepository,
        },
        infrastructure::session::InMemorySessionRepository,
    };

    type TestService<S> = Service<S, MockLLMClient, MockScratchFileStore>;

    fn service<S: SessionRepository>(repository: S) -> TestService<S> {
        Service::new(
            repository,
            MockLLMClient::new(),
            MockScratchFileStore::new(),
            None,
            "gemini-test".to_string(),
        )
    }

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let service = service(InMemorySessionRepository::new());
        let session = service.start_session().await.unwrap();

        assert!(session.credential().is_none());
        assert!(!session.plans_generated());
        assert!(session.qa_pairs().is_empty());
        assert_eq!(service.get_session(session.id).await.unwrap().id, session.id);
    }

    #[tokio::test]
    async fn test_blank_key_never_reaches_the_repository() {
        let mut repository = MockSessionRepository::new();
        repository.expect_set_credential().never();

        let service = service(repository);
        let result = service.set_credential(Uuid::new_v4(), "   ".to_string()).await;

        assert_eq!(result, Err(CoreError::MissingCredential));
    }

    #[tokio::test]
    async fn test_set_and_clear_credential() {
        let service = service(InMemorySessionRepository::new());
        let session = service.start_session().await.unwrap();

        let updated = service
            .set_credential(session.id, " key-123 ".to_string())
            .await
            .unwrap();
        assert_eq!(updated.credential().map(|c| c.expose()), Some("key-123"));

        let cleared = service.clear_credential(session.id).await.unwrap();
        assert!(cleared.credential().is_none());
    }

    #[tokio::test]
    async fn test_end_session_discards_it() {
        let service = service(InMemorySessionRepository::new());
        let session = service.start_session().await.unwrap();

        service.end_session(session.id).await.unwrap();

        assert_eq!(
            service.get_session(session.id).await,
            Err(CoreError::SessionNotFound)
        );
        assert_eq!(
            service.end_session(session.id).await,
            Err(CoreError::SessionNotFound)
        );
    }

    #[tokio::test]
    async fn test_purge_delegates_to_repository() {
        let mut repository = MockSessionRepository::new();
        repository
            .expect_purge_idle()
            .withf(|ttl| *ttl == Duration::from_secs(30))
            .times(1)
            .returning(|_| Box::pin(async { Ok(3) }));

        let service = service(repository);
        assert_eq!(service.purge_idle_sessions(Duration::from_secs(30)).await, Ok(3));
    }
}
