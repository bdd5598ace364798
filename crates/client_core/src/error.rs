use reqwest::StatusCode;
use shared::domain::LengthMismatch;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid game service endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("game service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("game service returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },
    #[error("malformed game service response: {0}")]
    Malformed(#[from] LengthMismatch),
}
