use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    planner::entities::{DietaryPlan, FitnessPlan, QaPair},
    session::entities::Session,
};

/// What a client may see of a session. The credential itself never leaves
/// the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionView {
    pub id: Uuid,
    pub has_credential: bool,
    pub plans_generated: bool,
    pub dietary_plan: Option<DietaryPlan>,
    pub fitness_plan: Option<FitnessPlan>,
    pub qa_pairs: Vec<QaPair>,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            has_credential: session.credential().is_some(),
            plans_generated: session.plans_generated(),
            dietary_plan: session.dietary_plan().cloned(),
            fitness_plan: session.fitness_plan().cloned(),
            qa_pairs: session.qa_pairs().to_vec(),
            created_at: session.created_at,
            last_active_at: session.last_active_at,
        }
    }
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        SessionView::from(&session)
    }
}
