//! Identity error types.
//!
//! Errors raised while deriving the client identity from a private key or an
//! explicit address. All of them are construction-time failures and are never
//! retried.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Represents errors that can occur during identity derivation
#[derive(ThisError, Debug)]
pub enum IdentityError {
	/// The supplied private key is malformed (bad hex, wrong length or an
	/// invalid scalar)
	#[error("Invalid private key: {0}")]
	InvalidKey(ErrorContext),

	/// The supplied address is structurally malformed
	#[error("Invalid address: {0}")]
	InvalidAddress(ErrorContext),

	/// Neither a private key nor an address was usable
	#[error("Identity required: {0}")]
	MissingIdentity(ErrorContext),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl IdentityError {
	// Invalid key
	pub fn invalid_key(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidKey(ErrorContext::new_with_log(msg, source, metadata))
	}

	// Invalid address
	pub fn invalid_address(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidAddress(ErrorContext::new_with_log(msg, source, metadata))
	}

	// Missing identity
	pub fn missing_identity(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MissingIdentity(ErrorContext::new_with_log(msg, source, metadata))
	}
}

impl TraceableError for IdentityError {
	fn trace_id(&self) -> String {
		match self {
			Self::InvalidKey(ctx) => ctx.trace_id.clone(),
			Self::InvalidAddress(ctx) => ctx.trace_id.clone(),
			Self::MissingIdentity(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => Uuid::new_v4().to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_key_formatting() {
		let error = IdentityError::invalid_key("decoded length is 31 bytes", None, None);
		assert_eq!(
			error.to_string(),
			"Invalid private key: decoded length is 31 bytes"
		);
	}

	#[test]
	fn test_invalid_address_formatting() {
		let error = IdentityError::invalid_address(
			"not hex",
			None,
			Some(HashMap::from([("address".to_string(), "0xzz".to_string())])),
		);
		assert_eq!(error.to_string(), "Invalid address: not hex [address=0xzz]");
	}

	#[test]
	fn test_missing_identity_formatting() {
		let error = IdentityError::missing_identity("no private key or address", None, None);
		assert_eq!(
			error.to_string(),
			"Identity required: no private key or address"
		);
	}

	#[test]
	fn test_trace_id_propagation() {
		let ctx = ErrorContext::new("Inner error", None, None);
		let trace_id = ctx.trace_id.clone();
		let error = IdentityError::InvalidKey(ctx);
		assert_eq!(error.trace_id(), trace_id);
	}
}
