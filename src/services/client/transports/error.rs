//! Error types for the gateway transports
//!
//! Provides error handling for network communication, JSON parsing and request serialization.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
	/// HTTP error
	#[error("HTTP error: status {status_code} for URL {url}")]
	Http {
		status_code: reqwest::StatusCode,
		url: String,
		body: String,
		context: ErrorContext,
	},

	/// Network error
	#[error("Network error: {0}")]
	Network(ErrorContext),

	/// JSON parsing error
	#[error("Failed to parse JSON response: {0}")]
	ResponseParse(ErrorContext),

	/// Request body serialization error
	#[error("Failed to serialize request JSON: {0}")]
	RequestSerialization(ErrorContext),
}

impl TransportError {
	pub fn http(
		status_code: reqwest::StatusCode,
		url: String,
		body: String,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let msg = format!("HTTP error: status {} for URL {}", status_code, url);

		Self::Http {
			status_code,
			url,
			body,
			context: ErrorContext::new_with_log(msg, source, metadata),
		}
	}

	pub fn network(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::Network(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn response_parse(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ResponseParse(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn request_serialization(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::RequestSerialization(ErrorContext::new_with_log(msg, source, metadata))
	}
}

impl TraceableError for TransportError {
	fn trace_id(&self) -> String {
		match self {
			Self::Http { context, .. } => context.trace_id.clone(),
			Self::Network(ctx) => ctx.trace_id.clone(),
			Self::ResponseParse(ctx) => ctx.trace_id.clone(),
			Self::RequestSerialization(ctx) => ctx.trace_id.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io;

	#[test]
	fn test_http_error_formatting() {
		let error = TransportError::http(
			reqwest::StatusCode::NOT_FOUND,
			"http://example.com".to_string(),
			"Not Found".to_string(),
			None,
			None,
		);
		assert_eq!(
			error.to_string(),
			"HTTP error: status 404 Not Found for URL http://example.com"
		);
	}

	#[test]
	fn test_network_error_formatting() {
		let error = TransportError::network("test error", None, None);
		assert_eq!(error.to_string(), "Network error: test error");

		let source_error = io::Error::other("test source");
		let error = TransportError::network(
			"test error",
			Some(Box::new(source_error)),
			Some(HashMap::from([("key1".to_string(), "value1".to_string())])),
		);
		assert_eq!(error.to_string(), "Network error: test error [key1=value1]");
	}

	#[test]
	fn test_response_parse_error_formatting() {
		let error = TransportError::response_parse("test error", None, None);
		assert_eq!(
			error.to_string(),
			"Failed to parse JSON response: test error"
		);
	}

	#[test]
	fn test_request_serialization_error_formatting() {
		let error = TransportError::request_serialization("test error", None, None);
		assert_eq!(
			error.to_string(),
			"Failed to serialize request JSON: test error"
		);
	}

	#[test]
	fn test_error_source_chain() {
		let io_error = io::Error::other("connection reset by peer");

		let outer_error = TransportError::http(
			reqwest::StatusCode::INTERNAL_SERVER_ERROR,
			"http://example.com".to_string(),
			"Internal Server Error".to_string(),
			Some(Box::new(io_error)),
			None,
		);

		if let TransportError::Http { context, .. } = &outer_error {
			assert_eq!(
				context.message,
				"HTTP error: status 500 Internal Server Error for URL http://example.com"
			);
			assert!(context.source.is_some());

			if let Some(src) = &context.source {
				assert_eq!(src.to_string(), "connection reset by peer");
			}
		} else {
			panic!("Expected Http variant");
		}
	}

	#[test]
	fn test_trace_id_propagation() {
		let error_context = ErrorContext::new("Inner error", None, None);
		let original_trace_id = error_context.trace_id.clone();

		let transport_error = TransportError::Http {
			status_code: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
			url: "http://example.com".to_string(),
			body: "Internal Server Error".to_string(),
			context: error_context,
		};

		assert_eq!(transport_error.trace_id(), original_trace_id);
	}
}
