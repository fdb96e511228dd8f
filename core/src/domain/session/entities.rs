use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    llm::value_objects::ApiCredential,
    planner::entities::{DietaryPlan, FitnessPlan, PlanBundle, QaPair},
};

/// One interactive visit's worth of state.
///
/// Plans are held as a single bundle, so "plans generated" is exactly
/// "bundle present" and both plan records exist together or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    credential: Option<ApiCredential>,
    plans: Option<PlanBundle>,
    qa_pairs: Vec<QaPair>,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            credential: None,
            plans: None,
            qa_pairs: Vec::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    pub fn credential(&self) -> Option<&ApiCredential> {
        self.credential.as_ref()
    }

    pub fn set_credential(&mut self, credential: Option<ApiCredential>) {
        self.credential = credential;
        self.touch();
    }

    pub fn plans(&self) -> Option<&PlanBundle> {
        self.plans.as_ref()
    }

    pub fn dietary_plan(&self) -> Option<&DietaryPlan> {
        self.plans.as_ref().map(|p| &p.dietary_plan)
    }

    pub fn fitness_plan(&self) -> Option<&FitnessPlan> {
        self.plans.as_ref().map(|p| &p.fitness_plan)
    }

    pub fn plans_generated(&self) -> bool {
        self.plans.is_some()
    }

    pub fn qa_pairs(&self) -> &[QaPair] {
        &self.qa_pairs
    }

    /// Installs freshly generated plans. Always empties the Q&A history.
    pub fn replace_plans(&mut self, plans: PlanBundle) {
        self.plans = Some(plans);
        self.qa_pairs.clear();
        self.touch();
    }

    /// Appends an answer built against the plans generated at `plans_generated_at`.
    /// Refused if those plans have since been replaced.
    pub fn push_answer(
        &mut self,
        pair: QaPair,
        plans_generated_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let plans = self.plans.as_ref().ok_or(CoreError::PlansNotGenerated)?;
        if plans.generated_at != plans_generated_at {
            return Err(CoreError::PlansReplaced);
        }

        self.qa_pairs.push(pair);
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    pub fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        now.signed_duration_since(self.last_active_at) > ttl
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
