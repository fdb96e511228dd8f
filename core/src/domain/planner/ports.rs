use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    planner::{
        entities::{PlanBundle, QaPair},
        value_objects::{AskQuestionInput, GeneratePlansInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PlannerService: Send + Sync {
    /// Two model calls, then replaces the session plans and clears its Q&A history.
    fn generate_plans(
        &self,
        input: GeneratePlansInput,
    ) -> impl Future<Output = Result<PlanBundle, CoreError>> + Send;

    fn ask_question(
        &self,
        input: AskQuestionInput,
    ) -> impl Future<Output = Result<QaPair, CoreError>> + Send;
}
