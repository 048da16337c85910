//! Model Registrar Library
//!
//! This file serves as the library root for the model-registrar crate,
//! organizing and exposing the various modules that make up the application.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;

pub use config::TrackingConfig;
pub use error::{RegistrarError, Result};
pub use logging::Logger;
pub use model::ModelDescriptor;
pub use registry::{Credentials, ModelStage, ModelVersion, RegistryClient, RegistryClientBuilder};
