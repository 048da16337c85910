//! Registry module for model registry interactions
//!
//! This module provides authentication and client logic for the MLflow model
//! registry REST API: registering models, creating versions, and moving
//! versions between lifecycle stages.

pub mod auth;
pub mod client;
pub mod types;

pub use auth::Credentials;
pub use client::{RegistryClient, RegistryClientBuilder};
pub use types::{ModelStage, ModelVersion, RegisteredModel};
