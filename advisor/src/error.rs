use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Battle analysis model not loaded")]
    NotReady,

    #[error("{0}")]
    InvalidState(String),
}

impl AdvisorError {
    pub fn missing_state() -> Self {
        AdvisorError::InvalidState("No battle state provided".to_string())
    }

    pub fn invalid(reason: impl std::fmt::Display) -> Self {
        AdvisorError::InvalidState(format!("Invalid battle state: {}", reason))
    }

    /// Short machine-readable tag for the error payload.
    pub fn kind(&self) -> &'static str {
        match self {
            AdvisorError::NotReady => "NotReady",
            AdvisorError::InvalidState(_) => "InvalidState",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
