use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::ApiCredential,
    planner::entities::{PlanBundle, QaPair},
    session::entities::Session,
};

/// Storage for live sessions. Every mutating method is a single atomic
/// transition on one session and fails with `SessionNotFound` for unknown ids.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create(&self, session: Session) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Returns the session and marks it active.
    fn get(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn set_credential(
        &self,
        session_id: Uuid,
        credential: Option<ApiCredential>,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn replace_plans(
        &self,
        session_id: Uuid,
        plans: PlanBundle,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Appends only while the plans generated at `plans_generated_at` are current.
    fn append_qa_pair(
        &self,
        session_id: Uuid,
        pair: QaPair,
        plans_generated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn purge_idle(&self, ttl: Duration) -> impl Future<Output = Result<usize, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionService: Send + Sync {
    fn start_session(&self) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn set_credential(
        &self,
        session_id: Uuid,
        api_key: String,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn clear_credential(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn end_session(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn purge_idle_sessions(
        &self,
        ttl: Duration,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
