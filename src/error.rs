use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::LexiconError;

/// Failures that stop the service from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request body could not be decoded into a journal entry
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(format!("{}\n", self))
    }
}
