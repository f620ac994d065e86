use thiserror::Error;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Unknown permission key: {0:?}")]
    UnknownPermission(String),
}

#[derive(Debug, Error)]
#[error("The user has not logged in")]
pub struct NotLoggedInError;

/// Failures reported by the backend inside an otherwise valid response
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    Rejected {
        message: String,
        error_code: Option<String>,
    },
    #[error("response did not include any data")]
    MissingData,
}

impl ApiError {
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { error_code, .. } => error_code.as_deref(),
            ApiError::MissingData => None,
        }
    }
}
