//! Gateway transport for the chain, indexer and REST endpoints.
//!
//! All backend traffic goes through the gRPC-gateway JSON mapping, so a
//! single HTTP transport serves every module client. Each resolved endpoint
//! gets its own transport instance; module clients share them by handle.

mod error;
mod http;

pub use error::TransportError;
pub use http::HttpTransportClient;

use reqwest_retry::{
	default_on_request_failure, default_on_request_success, Retryable, RetryableStrategy,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Transport seam every module client talks through.
///
/// Object-safe so registries can share `Arc<dyn GatewayTransport>` handles
/// and tests can substitute a mock.
#[async_trait::async_trait]
pub trait GatewayTransport: Send + Sync {
	/// The endpoint this transport is bound to.
	fn base_url(&self) -> &url::Url;

	/// Issues a GET against a gateway path with optional query parameters.
	async fn send_get(
		&self,
		path: &str,
		query: &[(String, String)],
	) -> Result<Value, TransportError>;

	/// Issues a POST with a JSON body against a gateway path.
	async fn send_post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}

/// Decodes a gateway JSON payload into its typed response shape.
pub(crate) fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, TransportError> {
	serde_json::from_value(payload).map_err(|e| {
		TransportError::response_parse(
			"Failed to decode gateway response",
			Some(e.into()),
			None,
		)
	})
}

/// A default retry strategy that retries on requests based on the status code
/// This can be used to customise the retry strategy
pub struct TransientErrorRetryStrategy;
impl RetryableStrategy for TransientErrorRetryStrategy {
	fn handle(
		&self,
		res: &Result<reqwest::Response, reqwest_middleware::Error>,
	) -> Option<Retryable> {
		match res {
			Ok(success) => default_on_request_success(success),
			Err(error) => default_on_request_failure(error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;
	use serde_json::json;

	#[derive(Debug, Deserialize, PartialEq)]
	struct Sample {
		value: String,
	}

	#[test]
	fn test_decode_valid_payload() {
		let decoded: Sample = decode(json!({ "value": "ok" })).unwrap();
		assert_eq!(
			decoded,
			Sample {
				value: "ok".to_string()
			}
		);
	}

	#[test]
	fn test_decode_invalid_payload() {
		let result: Result<Sample, _> = decode(json!({ "value": 42 }));
		assert!(matches!(result, Err(TransportError::ResponseParse(_))));
	}
}
