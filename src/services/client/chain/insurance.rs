//! Insurance fund chain module client.

use std::sync::Arc;

use crate::{
	models::chain::{
		EstimatedRedemptionsResponse, InsuranceFundResponse, InsuranceFundsResponse,
		InsuranceModuleParamsResponse, PendingRedemptionsResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct InsuranceClient {
	transport: Arc<dyn GatewayTransport>,
}

impl InsuranceClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(
		&self,
	) -> Result<InsuranceModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/insurance/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_insurance_funds(&self) -> Result<InsuranceFundsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/insurance/v1beta1/insurance_funds", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_insurance_fund(
		&self,
		market_id: &str,
	) -> Result<InsuranceFundResponse, TransportError> {
		let path = format!("/injective/insurance/v1beta1/insurance_funds/{}", market_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_estimated_redemptions(
		&self,
		market_id: &str,
		address: &str,
	) -> Result<EstimatedRedemptionsResponse, TransportError> {
		let query = vec![
			("marketId".to_string(), market_id.to_string()),
			("address".to_string(), address.to_string()),
		];
		let payload = self
			.transport
			.send_get("/injective/insurance/v1beta1/estimated_redemptions", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_pending_redemptions(
		&self,
		market_id: &str,
		address: &str,
	) -> Result<PendingRedemptionsResponse, TransportError> {
		let query = vec![
			("marketId".to_string(), market_id.to_string()),
			("address".to_string(), address.to_string()),
		];
		let payload = self
			.transport
			.send_get("/injective/insurance/v1beta1/pending_redemptions", &query)
			.await?;
		decode(payload)
	}
}
