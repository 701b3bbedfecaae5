use thiserror::Error;

use crate::validate::ValidationReport;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
    #[error("Invalid email service endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Invalid contact channel: {0}")]
    InvalidChannel(String),
    #[error("Invalid submission: {} field(s) need attention", .0.len())]
    Invalid(ValidationReport),
    #[error("A submission is already being sent")]
    Busy,
    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Invalid encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Failure of the single call to the email service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("email service rejected the message ({status}): {text}")]
    Rejected { status: u16, text: String },
    #[error("email service unreachable: {0}")]
    Network(String),
    #[error("request could not be prepared: {0}")]
    Request(String),
}

impl From<Error> for DeliveryError {
    fn from(e: Error) -> Self {
        DeliveryError::Request(e.to_string())
    }
}
