//! Mint chain module client.

use std::sync::Arc;

use crate::{
	models::chain::{AnnualProvisionsResponse, InflationResponse, MintModuleParamsResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct MintClient {
	transport: Arc<dyn GatewayTransport>,
}

impl MintClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<MintModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/mint/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_inflation(&self) -> Result<InflationResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/mint/v1beta1/inflation", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_annual_provisions(
		&self,
	) -> Result<AnnualProvisionsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/mint/v1beta1/annual_provisions", &[])
			.await?;
		decode(payload)
	}
}
