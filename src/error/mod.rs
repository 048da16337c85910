//! Error types for descriptor loading and registry operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistrarError>;

#[derive(Error, Debug)]
pub enum RegistrarError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Model descriptor file is absent
    #[error("Model descriptor not found: {}", .0.display())]
    DescriptorNotFound(PathBuf),

    /// File IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP transport errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL errors
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Structured error returned by the registry API
    #[error("Registry error [{code}]: {message}")]
    Api { code: String, message: String },

    /// Registry responses without a decodable error body
    #[error("Registry error: {0}")]
    Registry(String),
}

impl RegistrarError {
    /// Error code reported by the registry, if this is an API error
    pub fn api_code(&self) -> Option<&str> {
        match self {
            RegistrarError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
