use thiserror::Error;

/// Every failure a service operation can surface.
///
/// The first four variants are the relay taxonomy: they are the only ways a
/// call to the generative service can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Gemini API key is missing")]
    MissingCredential,

    #[error("Gemini API key was rejected: {0}")]
    InvalidCredential(String),

    #[error("Generative service unreachable: {0}")]
    ServiceUnreachable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session not found")]
    SessionNotFound,

    #[error("No plans have been generated for this session")]
    PlansNotGenerated,

    #[error("The plans changed while the question was being answered")]
    PlansReplaced,

    #[error("Scratch file error: {0}")]
    ScratchFile(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// True for the failures that come back from a model call.
    pub fn is_relay_failure(&self) -> bool {
        matches!(
            self,
            CoreError::MissingCredential
                | CoreError::InvalidCredential(_)
                | CoreError::ServiceUnreachable(_)
                | CoreError::InvalidInput(_)
        )
    }
}
