use thiserror::Error;

/// Rejected option values at the CLI or HTTP boundary.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{option} must be between {min} and {max}, got {value}")]
    OutOfRange {
        option: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{option} must be a finite number")]
    NotFinite { option: &'static str },
    #[error("{option} must be >= 0")]
    Negative { option: &'static str },
    #[error("Invalid API payload: {0}")]
    Payload(String),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] clap::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
