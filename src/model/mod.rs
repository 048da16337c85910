//! Model descriptor handling
//!
//! The descriptor is the hand-off point between the training pipeline and this tool:
//! a small JSON file identifying which run produced the model and where its
//! serialized artifact lives inside that run's storage.

pub mod descriptor;

pub use descriptor::ModelDescriptor;
