use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::ApiCredential,
    planner::entities::{PlanBundle, QaPair},
    session::{entities::Session, ports::SessionRepository},
};

/// Process-local session store. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, session_id: Uuid, f: F) -> Result<Session, CoreError>
    where
        F: FnOnce(&mut Session) -> Result<(), CoreError> + Send,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(CoreError::SessionNotFound)?;

        f(session)?;
        Ok(session.clone())
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        let mut sessions = self.sessions.write().await;

        Ok(sessions.get_mut(&session_id).map(|session| {
            session.touch();
            session.clone()
        }))
    }

    async fn delete(&self, session_id: Uuid) -> Result<bool, CoreError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(&session_id).is_some())
    }

    async fn set_credential(
        &self,
        session_id: Uuid,
        credential: Option<ApiCredential>,
    ) -> Result<Session, CoreError> {
        self.update(session_id, |session| {
            session.set_credential(credential);
            Ok(())
        })
        .await
    }

    async fn replace_plans(
        &self,
        session_id: Uuid,
        plans: PlanBundle,
    ) -> Result<Session, CoreError> {
        self.update(session_id, |session| {
            session.replace_plans(plans);
            Ok(())
        })
        .await
    }

    async fn append_qa_pair(
        &self,
        session_id: Uuid,
        pair: QaPair,
        plans_generated_at: DateTime<Utc>,
    ) -> Result<Session, CoreError> {
        self.update(session_id, |session| {
            session.push_answer(pair, plans_generated_at)
        })
        .await
    }

    async fn purge_idle(&self, ttl: Duration) -> Result<usize, CoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, ttl));

        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.sessions.read().await.len())
    }
}
