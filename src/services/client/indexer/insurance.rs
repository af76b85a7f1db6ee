//! Insurance fund indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{IndexerInsuranceFundsResponse, InsuranceRedemptionsResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct IndexerInsuranceClient {
	transport: Arc<dyn GatewayTransport>,
}

impl IndexerInsuranceClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_insurance_funds(
		&self,
	) -> Result<IndexerInsuranceFundsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/insurance/v1/insurance_funds", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_redemptions(
		&self,
		redeemer: Option<&str>,
		redemption_denom: Option<&str>,
	) -> Result<InsuranceRedemptionsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(redeemer) = redeemer {
			query.push(("redeemer".to_string(), redeemer.to_string()));
		}
		if let Some(redemption_denom) = redemption_denom {
			query.push((
				"redemptionDenom".to_string(),
				redemption_denom.to_string(),
			));
		}
		let payload = self
			.transport
			.send_get("/api/exchange/insurance/v1/redemptions", &query)
			.await?;
		decode(payload)
	}
}
