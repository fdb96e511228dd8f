use uuid::Uuid;

use crate::domain::planner::entities::UserProfile;

#[derive(Debug, Clone)]
pub struct GeneratePlansInput {
    pub session_id: Uuid,
    pub profile: UserProfile,
}

#[derive(Debug, Clone)]
pub struct AskQuestionInput {
    pub session_id: Uuid,
    pub question: String,
}
