use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetCredentialValidator {
    #[validate(length(min = 1, message = "api_key is required"))]
    pub api_key: String,
}
