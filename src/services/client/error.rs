//! Error types for the client facade
//!
//! Every facade operation surfaces backend failures as a single
//! `NormalizedFault` carrying a flat error code and the dispatcher
//! operation tag, so callers never handle transport internals directly.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error;

/// Classification of a normalized backend fault.
///
/// Deliberately flat today; richer codes (timeout, not-found, invalid
/// argument) can be added without touching the dispatch chokepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
	Unspecified,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Unspecified => write!(f, "unspecified"),
		}
	}
}

/// The single fault type a facade operation may raise.
#[derive(Debug, Error)]
#[error("{operation} failed ({code}): {context}")]
pub struct NormalizedFault {
	/// Flat classification of the underlying fault
	pub code: ErrorCode,
	/// The dispatcher entry point that observed the fault
	pub operation: &'static str,
	/// Cause, metadata and trace id
	pub context: ErrorContext,
}

impl NormalizedFault {
	/// Wraps an underlying fault observed at the dispatch chokepoint.
	pub fn new(
		operation: &'static str,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let msg = format!("{} failed", operation);

		Self {
			code: ErrorCode::Unspecified,
			operation,
			context: ErrorContext::new_with_log(msg, source, metadata),
		}
	}
}

impl TraceableError for NormalizedFault {
	fn trace_id(&self) -> String {
		self.context.trace_id.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::services::client::TransportError;

	#[test]
	fn test_fault_formatting() {
		let fault = NormalizedFault::new("query", None, None);
		assert_eq!(fault.to_string(), "query failed (unspecified): query failed");
		assert_eq!(fault.operation, "query");
		assert_eq!(fault.code, ErrorCode::Unspecified);
	}

	#[test]
	fn test_fault_preserves_cause() {
		let cause = TransportError::network("connection refused", None, None);
		let fault = NormalizedFault::new("request", Some(Box::new(cause)), None);

		assert_eq!(fault.operation, "request");
		let source = fault.context.source.as_ref().unwrap();
		assert_eq!(source.to_string(), "Network error: connection refused");
	}

	#[test]
	fn test_trace_id_from_context() {
		let fault = NormalizedFault::new("query", None, None);
		assert_eq!(fault.trace_id(), fault.context.trace_id);
	}
}
