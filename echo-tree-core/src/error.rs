//! Error types for word trees and follower statistics.

use thiserror::Error;

/// Result type alias for echo-tree operations.
pub type Result<T> = std::result::Result<T, EchoTreeError>;

/// Errors that can occur while building or reading word trees.
#[derive(Debug, Error)]
pub enum EchoTreeError {
	/// A caller-provided value is outside what the operation accepts.
	#[error("invalid argument: {message}")]
	InvalidArgument { message: String },

	/// JSON text does not describe a well-formed word node.
	#[error("malformed word node: {0}")]
	MalformedNode(#[source] serde_json::Error),

	/// Explorer configuration could not be parsed.
	#[error("invalid configuration: {0}")]
	InvalidConfig(#[source] serde_json::Error),

	/// I/O error (configuration files).
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
}

impl EchoTreeError {
	pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument { message: message.into() }
	}
}
