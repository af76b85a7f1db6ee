//! Peggy chain module client.

use std::sync::Arc;

use crate::{
	models::chain::PeggyModuleParamsResponse,
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct PeggyClient {
	transport: Arc<dyn GatewayTransport>,
}

impl PeggyClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<PeggyModuleParamsResponse, TransportError> {
		let payload = self.transport.send_get("/peggy/v1/params", &[]).await?;
		decode(payload)
	}
}
