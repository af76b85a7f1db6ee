//! Configuration error types.
//!
//! This module defines the error types that can occur while resolving the
//! network selection into concrete endpoints.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Represents errors that can occur during configuration operations
#[derive(ThisError, Debug)]
pub enum ConfigError {
	/// The supplied network name is not one of the recognized selectors
	#[error("Unknown network: {0}")]
	UnknownNetwork(ErrorContext),

	/// Errors related to validation failures
	#[error("Validation error: {0}")]
	ValidationError(ErrorContext),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl ConfigError {
	// Unknown network
	pub fn unknown_network(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnknownNetwork(ErrorContext::new_with_log(msg, source, metadata))
	}

	// Validation error
	pub fn validation_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new_with_log(msg, source, metadata))
	}
}

impl TraceableError for ConfigError {
	fn trace_id(&self) -> String {
		match self {
			Self::UnknownNetwork(ctx) => ctx.trace_id.clone(),
			Self::ValidationError(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => Uuid::new_v4().to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{Error as IoError, ErrorKind};

	#[test]
	fn test_unknown_network_formatting() {
		let error = ConfigError::unknown_network("Nonexistent", None, None);
		assert_eq!(error.to_string(), "Unknown network: Nonexistent");

		let source_error = IoError::new(ErrorKind::NotFound, "test source");
		let error = ConfigError::unknown_network(
			"Nonexistent",
			Some(Box::new(source_error)),
			Some(HashMap::from([("key1".to_string(), "value1".to_string())])),
		);
		assert_eq!(error.to_string(), "Unknown network: Nonexistent [key1=value1]");
	}

	#[test]
	fn test_validation_error_formatting() {
		let error = ConfigError::validation_error("test error", None, None);
		assert_eq!(error.to_string(), "Validation error: test error");
	}

	#[test]
	fn test_from_anyhow_error() {
		let anyhow_error = anyhow::anyhow!("test anyhow error");
		let config_error: ConfigError = anyhow_error.into();
		assert!(matches!(config_error, ConfigError::Other(_)));
		assert_eq!(config_error.to_string(), "test anyhow error");
	}

	#[test]
	fn test_trace_id_propagation() {
		let error_context = ErrorContext::new("Inner error", None, None);
		let original_trace_id = error_context.trace_id.clone();

		let config_error = ConfigError::UnknownNetwork(error_context);
		assert_eq!(config_error.trace_id(), original_trace_id);

		let anyhow_error = anyhow::anyhow!("Test anyhow error");
		let config_error: ConfigError = anyhow_error.into();
		assert!(!config_error.trace_id().is_empty());
	}
}
