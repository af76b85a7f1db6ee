//! Bank chain module client.

use std::sync::Arc;

use crate::{
	models::{
		chain::{
			BalanceResponse, BalancesResponse, BankModuleParamsResponse, DenomMetadataResponse,
			DenomOwnersResponse, DenomsMetadataResponse, SupplyOfResponse, TotalSupplyResponse,
		},
		PageRequest,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct BankClient {
	transport: Arc<dyn GatewayTransport>,
}

impl BankClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<BankModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/bank/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_balance(
		&self,
		address: &str,
		denom: &str,
	) -> Result<BalanceResponse, TransportError> {
		let path = format!("/cosmos/bank/v1beta1/balances/{}/by_denom", address);
		let query = vec![("denom".to_string(), denom.to_string())];
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_balances(
		&self,
		address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<BalancesResponse, TransportError> {
		let path = format!("/cosmos/bank/v1beta1/balances/{}", address);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_total_supply(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<TotalSupplyResponse, TransportError> {
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self
			.transport
			.send_get("/cosmos/bank/v1beta1/supply", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_supply_of(&self, denom: &str) -> Result<SupplyOfResponse, TransportError> {
		let query = vec![("denom".to_string(), denom.to_string())];
		let payload = self
			.transport
			.send_get("/cosmos/bank/v1beta1/supply/by_denom", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_denoms_metadata(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<DenomsMetadataResponse, TransportError> {
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self
			.transport
			.send_get("/cosmos/bank/v1beta1/denoms_metadata", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_denom_metadata(
		&self,
		denom: &str,
	) -> Result<DenomMetadataResponse, TransportError> {
		let path = format!("/cosmos/bank/v1beta1/denoms_metadata/{}", denom);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_denom_owners(
		&self,
		denom: &str,
		pagination: Option<&PageRequest>,
	) -> Result<DenomOwnersResponse, TransportError> {
		let path = format!("/cosmos/bank/v1beta1/denom_owners/{}", denom);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}
}
