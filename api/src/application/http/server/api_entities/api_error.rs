use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use healthsuite_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;
use validator::Validate;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please enter your Gemini API Key to proceed. Get your API key here: https://aistudio.google.com/apikey";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Unauthorized { code: &'static str, message: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized { code, .. } => (StatusCode::UNAUTHORIZED, *code),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "E_PAYLOAD_TOO_LARGE"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_SERVICE_UNREACHABLE"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        if error.is_relay_failure() {
            warn!("Relay request failed: {}", error);
        }

        match error {
            CoreError::MissingCredential => ApiError::Unauthorized {
                code: "E_MISSING_CREDENTIAL",
                message: MISSING_CREDENTIAL_MESSAGE.to_string(),
            },
            CoreError::InvalidCredential(_) => ApiError::Unauthorized {
                code: "E_INVALID_CREDENTIAL",
                message: "The Gemini API key was rejected".to_string(),
            },
            CoreError::ServiceUnreachable(message) => ApiError::BadGateway(message),
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::SessionNotFound => ApiError::NotFound("Session not found".to_string()),
            CoreError::PlansNotGenerated => ApiError::Conflict(
                "Generate your personalized plan before asking questions".to_string(),
            ),
            CoreError::PlansReplaced => ApiError::Conflict(
                "Your plans were regenerated while answering. Please ask again".to_string(),
            ),
            CoreError::ScratchFile(message) => {
                error!("Scratch file failure: {}", message);
                ApiError::InternalServerError("Internal server error".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
