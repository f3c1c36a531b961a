//! Error types for the flash layer and its session backends

use thiserror::Error;

/// Errors raised by session backends
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
	/// Reading or writing the backing storage failed
	#[error("Session I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The stored session could not be (de)serialized
	#[error("Session serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Backend-specific failure
	#[error("Session backend error: {0}")]
	Backend(String),
}

/// Errors raised by the flash layer
///
/// Per-key codec failures during hydrate and persist never reach the caller;
/// they are logged and the entry is dropped. The variants here surface from
/// the codec functions, configuration validation, and session saves.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FlashError {
	/// A value list could not be encoded or decoded as JSON
	#[error("Flash codec error: {0}")]
	Codec(#[from] serde_json::Error),

	/// Configuration failed validation
	#[error("Invalid flash configuration: {0}")]
	InvalidConfig(String),

	/// The session failed to save
	#[error(transparent)]
	Session(#[from] SessionError),
}

/// Result type for flash operations
pub type Result<T> = std::result::Result<T, FlashError>;
