use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

/// Failures while wiring the service together, before any request is served.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
    #[error("Invalid allowed origin: {0}")]
    InvalidOrigin(#[from] InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, AppError>;
