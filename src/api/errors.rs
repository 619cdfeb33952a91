//! Errors raised while talking to the Actor Showcase API

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed with HTTP status {status_code}")]
    Status {
        status_code: u16,
        url: String,
    },

    #[error("Actor with id {0} not found")]
    NotFound(i64),

    #[error("Could not reach the actors API")]
    Transport(#[from] reqwest::Error),

    #[error("The actors API returned data that could not be read")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Numeric HTTP status, when the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status_code, .. } => Some(*status_code),
            ApiError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}
