//! Auction chain module client.

use std::sync::Arc;

use crate::{
	models::chain::{AuctionModuleParamsResponse, AuctionModuleStateResponse, CurrentBasketResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct AuctionClient {
	transport: Arc<dyn GatewayTransport>,
}

impl AuctionClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<AuctionModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/auction/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_module_state(&self) -> Result<AuctionModuleStateResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/auction/v1beta1/module_state", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_current_basket(&self) -> Result<CurrentBasketResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/auction/v1beta1/current_basket", &[])
			.await?;
		decode(payload)
	}
}
