use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, ClinicError>;

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid section: {0}")]
    InvalidSection(String),

    #[error("invalid species: {0}")]
    InvalidSpecies(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
}

impl ClinicError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidSection(_) => "INVALID_SECTION",
            Self::InvalidSpecies(_) => "INVALID_SPECIES",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
        }
    }
}
