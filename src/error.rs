//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation API error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Generation API returned no image artifacts")]
    UpstreamEmptyResult,

    #[error("Failed to reach generation API: {0}")]
    Communication(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
