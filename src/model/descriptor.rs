//! Model descriptor loading and artifact URI construction

use crate::error::{RegistrarError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Descriptor written by the training step for the model to register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Opaque run handle issued by the tracking backend
    pub run_id: String,
    /// Relative artifact path within the run's storage
    pub model_path: String,
}

impl ModelDescriptor {
    /// Load the descriptor from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RegistrarError::DescriptorNotFound(path.to_path_buf())
            } else {
                RegistrarError::Io(e)
            }
        })?;

        let descriptor: ModelDescriptor = serde_json::from_str(&contents)?;
        Ok(descriptor)
    }

    /// Artifact URI understood by the tracking server
    pub fn model_uri(&self) -> String {
        format!("runs:/{}/{}", self.run_id, self.model_path)
    }
}
