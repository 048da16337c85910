//! Configuration management module

use crate::error::{RegistrarError, Result};
use serde::{Deserialize, Serialize};

/// Tracking server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Base URL of the tracking server, without the API path
    pub uri: String,
    /// Timeout for network operations in seconds
    pub timeout: u64,
    pub skip_tls: bool,
}

impl TrackingConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            timeout: 300,
            skip_tls: false,
        }
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_skip_tls(mut self, skip_tls: bool) -> Self {
        self.skip_tls = skip_tls;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.uri.is_empty() {
            return Err(RegistrarError::Validation(
                "Tracking URI cannot be empty".to_string(),
            ));
        }

        if !self.uri.starts_with("http://") && !self.uri.starts_with("https://") {
            return Err(RegistrarError::Validation(format!(
                "Invalid tracking URI: {}. Must start with http:// or https://",
                self.uri
            )));
        }

        // Scheme alone is not enough, the host part must parse too
        url::Url::parse(&self.uri)?;

        if self.timeout == 0 {
            return Err(RegistrarError::Validation(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
