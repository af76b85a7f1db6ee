//! Oracle chain module client.

use std::sync::Arc;

use crate::{
	models::chain::OracleModuleParamsResponse,
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct OracleClient {
	transport: Arc<dyn GatewayTransport>,
}

impl OracleClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<OracleModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/oracle/v1beta1/params", &[])
			.await?;
		decode(payload)
	}
}
