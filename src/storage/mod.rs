//! Storage module for the binary model format and persistence.

mod format;

pub use format::{ModelFormat, ModelHeader};

use crate::error::Result;
use crate::model::Model;

/// Serializes a model into a self-describing byte buffer.
pub fn serialize(model: &Model) -> Result<Vec<u8>> {
    ModelFormat::to_bytes(model)
}

/// Restores a model from [`serialize`] output.
pub fn deserialize(bytes: &[u8]) -> Result<Model> {
    ModelFormat::from_bytes(bytes)
}
