//! JSON serialization for the task collection.
//!
//! Provides encode/decode functions used for both the persistence blob and
//! export/import files. The storage blob is compact JSON; export files use
//! 2-space-indented JSON for readability.

use crate::task::Task;

/// Error type for codec encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Encodes the task collection as a compact JSON array.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the collection cannot be
/// serialized.
pub fn encode(tasks: &[Task]) -> Result<String, CodecError> {
    serde_json::to_string(tasks).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Encodes the task collection as a 2-space-indented JSON array, the format
/// used for export files.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the collection cannot be
/// serialized.
pub fn encode_pretty(tasks: &[Task]) -> Result<String, CodecError> {
    serde_json::to_string_pretty(tasks).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Decodes a JSON array of task records.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the input is not a valid task
/// array.
pub fn decode(json: &str) -> Result<Vec<Task>, CodecError> {
    serde_json::from_str(json).map_err(|e| CodecError::Serialization(e.to_string()))
}
