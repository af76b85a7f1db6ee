//! HTTP transport implementation for the gRPC-gateway endpoints.
//!
//! One transport instance is bound to one resolved endpoint and speaks the
//! gateway's JSON mapping: GET with query parameters for queries, POST with
//! a JSON body for smart-query style calls. Retry policy covers transient
//! failures only; anything else surfaces as a `TransportError`.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::{
	services::client::transports::{GatewayTransport, TransientErrorRetryStrategy, TransportError},
	utils::http::{build_gateway_http_client, RetryConfig},
};

/// HTTP client bound to a single gateway endpoint.
///
/// The client is thread-safe and can be shared across multiple tasks;
/// cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// Retryable HTTP client for making requests
	client: ClientWithMiddleware,
	/// The endpoint every path is resolved against
	base_url: Url,
}

impl HttpTransportClient {
	/// Creates a new transport bound to `base_url`.
	///
	/// Construction performs no I/O; liveness is the caller's concern
	/// (see the facade's health probe).
	pub fn new(base_url: Url) -> Result<Self, anyhow::Error> {
		let client =
			build_gateway_http_client(&RetryConfig::default(), TransientErrorRetryStrategy)?;

		Ok(Self { client, base_url })
	}

	fn endpoint_url(&self, path: &str) -> Result<Url, TransportError> {
		self.base_url
			.join(path.trim_start_matches('/'))
			.map_err(|e| {
				TransportError::request_serialization(
					format!("Invalid gateway path: {}", path),
					Some(e.into()),
					None,
				)
			})
	}

	async fn read_json(url: Url, response: reqwest::Response) -> Result<Value, TransportError> {
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(TransportError::http(
				status,
				url.to_string(),
				body,
				None,
				None,
			));
		}

		response.json::<Value>().await.map_err(|e| {
			TransportError::response_parse(
				format!("Failed to parse JSON response from {}", url),
				Some(e.into()),
				None,
			)
		})
	}
}

#[async_trait]
impl GatewayTransport for HttpTransportClient {
	fn base_url(&self) -> &Url {
		&self.base_url
	}

	#[instrument(skip(self, query), fields(endpoint = %self.base_url))]
	async fn send_get(
		&self,
		path: &str,
		query: &[(String, String)],
	) -> Result<Value, TransportError> {
		let url = self.endpoint_url(path)?;

		let mut request = self.client.get(url.clone());
		if !query.is_empty() {
			request = request.query(query);
		}

		let response = request.send().await.map_err(|e| {
			TransportError::network(
				format!("Failed to reach {}", url),
				Some(e.into()),
				None,
			)
		})?;

		Self::read_json(url, response).await
	}

	#[instrument(skip(self, body), fields(endpoint = %self.base_url))]
	async fn send_post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
		let url = self.endpoint_url(path)?;

		let response = self
			.client
			.post(url.clone())
			.json(body)
			.send()
			.await
			.map_err(|e| {
				TransportError::network(
					format!("Failed to reach {}", url),
					Some(e.into()),
					None,
				)
			})?;

		Self::read_json(url, response).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_endpoint_url_joins_paths() {
		let transport =
			HttpTransportClient::new(Url::parse("https://sentry.lcd.injective.network:443").unwrap())
				.unwrap();

		let url = transport
			.endpoint_url("/cosmos/bank/v1beta1/params")
			.unwrap();
		assert_eq!(
			url.as_str(),
			"https://sentry.lcd.injective.network/cosmos/bank/v1beta1/params"
		);

		// Leading slash is optional
		let url = transport.endpoint_url("cosmos/bank/v1beta1/params").unwrap();
		assert_eq!(
			url.as_str(),
			"https://sentry.lcd.injective.network/cosmos/bank/v1beta1/params"
		);
	}

	#[test]
	fn test_construction_is_offline() {
		// No backend behind this address; construction must still succeed.
		let transport = HttpTransportClient::new(Url::parse("http://127.0.0.1:1").unwrap());
		assert!(transport.is_ok());
	}
}
