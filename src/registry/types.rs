//! Wire types for the registry REST API
//!
//! Request and response bodies follow the MLflow REST API 2.0 model registry
//! endpoints. Only the fields this tool consumes are modeled; unknown response
//! fields are ignored.

use crate::error::{RegistrarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stages a model version can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStage {
    None,
    Staging,
    Production,
    Archived,
}

impl ModelStage {
    /// Canonical capitalization used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStage::None => "None",
            ModelStage::Staging => "Staging",
            ModelStage::Production => "Production",
            ModelStage::Archived => "Archived",
        }
    }
}

impl fmt::Display for ModelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelStage {
    type Err = RegistrarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ModelStage::None),
            "staging" => Ok(ModelStage::Staging),
            "production" => Ok(ModelStage::Production),
            "archived" => Ok(ModelStage::Archived),
            _ => Err(RegistrarError::Validation(format!(
                "Unknown stage: {}. Must be one of: None, Staging, Production, Archived",
                s
            ))),
        }
    }
}

/// Registered model entry in the registry catalog
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredModel {
    pub name: String,
    #[serde(default)]
    pub creation_timestamp: Option<i64>,
    #[serde(default)]
    pub last_updated_timestamp: Option<i64>,
}

/// One registered version of a named model
#[derive(Debug, Clone, Deserialize)]
pub struct ModelVersion {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub current_stage: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateRegisteredModelRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CreateRegisteredModelResponse {
    pub registered_model: RegisteredModel,
}

#[derive(Debug, Serialize)]
pub struct CreateModelVersionRequest<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub run_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CreateModelVersionResponse {
    pub model_version: ModelVersion,
}

#[derive(Debug, Serialize)]
pub struct TransitionStageRequest<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub stage: &'a str,
    pub archive_existing_versions: bool,
}

#[derive(Debug, Deserialize)]
pub struct TransitionStageResponse {
    pub model_version: ModelVersion,
}

#[derive(Debug, Deserialize)]
pub struct GetModelVersionResponse {
    pub model_version: ModelVersion,
}

/// Error body returned by the registry on failed calls
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub message: String,
}

/// Error code the registry reports when a registered model name is taken
pub const RESOURCE_ALREADY_EXISTS: &str = "RESOURCE_ALREADY_EXISTS";
