//! Web3 gateway client.

use std::sync::Arc;

use crate::{
	models::indexer::GasPriceResponse,
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct Web3GatewayClient {
	transport: Arc<dyn GatewayTransport>,
}

impl Web3GatewayClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_gas_price(&self) -> Result<GasPriceResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/web3gw/v1/gas_price", &[])
			.await?;
		decode(payload)
	}
}
