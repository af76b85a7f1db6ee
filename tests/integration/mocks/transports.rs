use mockall::mock;
use serde_json::Value;
use url::Url;

use injective_client::services::client::{GatewayTransport, TransportError};

// Mock implementation of the gateway transport seam.
// Lets tests script per-path JSON payloads and failures without a server.
mock! {
	pub GatewayTransportClient {}

	#[async_trait::async_trait]
	impl GatewayTransport for GatewayTransportClient {
		fn base_url(&self) -> &Url;
		async fn send_get(
			&self,
			path: &str,
			query: &[(String, String)],
		) -> Result<Value, TransportError>;
		async fn send_post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
	}
}
