//! Staking chain module client.

use std::sync::Arc;

use crate::{
	models::{
		chain::{
			DelegationEntry, DelegationsResponse, RedelegationsResponse, StakingModuleParamsResponse,
			StakingPoolResponse, UnbondingDelegationsResponse, ValidatorResponse, ValidatorsResponse,
		},
		PageRequest,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct StakingClient {
	transport: Arc<dyn GatewayTransport>,
}

impl StakingClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<StakingModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/staking/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_pool(&self) -> Result<StakingPoolResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/staking/v1beta1/pool", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_validators(
		&self,
		status: Option<&str>,
		pagination: Option<&PageRequest>,
	) -> Result<ValidatorsResponse, TransportError> {
		let mut query = pagination.map(PageRequest::to_query).unwrap_or_default();
		if let Some(status) = status {
			query.push(("status".to_string(), status.to_string()));
		}
		let payload = self
			.transport
			.send_get("/cosmos/staking/v1beta1/validators", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_validator(
		&self,
		validator_address: &str,
	) -> Result<ValidatorResponse, TransportError> {
		let path = format!("/cosmos/staking/v1beta1/validators/{}", validator_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	/// All delegations towards one validator.
	pub async fn fetch_validator_delegations(
		&self,
		validator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<DelegationsResponse, TransportError> {
		let path = format!(
			"/cosmos/staking/v1beta1/validators/{}/delegations",
			validator_address
		);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_validator_unbonding_delegations(
		&self,
		validator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<UnbondingDelegationsResponse, TransportError> {
		let path = format!(
			"/cosmos/staking/v1beta1/validators/{}/unbonding_delegations",
			validator_address
		);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	/// One delegator's delegation towards one validator.
	pub async fn fetch_delegation(
		&self,
		delegator_address: &str,
		validator_address: &str,
	) -> Result<DelegationEntry, TransportError> {
		let path = format!(
			"/cosmos/staking/v1beta1/validators/{}/delegations/{}",
			validator_address, delegator_address
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		#[derive(serde::Deserialize)]
		struct Wrapper {
			#[serde(default)]
			delegation_response: DelegationEntry,
		}
		let wrapper: Wrapper = decode(payload)?;
		Ok(wrapper.delegation_response)
	}

	pub async fn fetch_delegations(
		&self,
		delegator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<DelegationsResponse, TransportError> {
		let path = format!("/cosmos/staking/v1beta1/delegations/{}", delegator_address);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_unbonding_delegations(
		&self,
		delegator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<UnbondingDelegationsResponse, TransportError> {
		let path = format!(
			"/cosmos/staking/v1beta1/delegators/{}/unbonding_delegations",
			delegator_address
		);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_redelegations(
		&self,
		delegator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<RedelegationsResponse, TransportError> {
		let path = format!(
			"/cosmos/staking/v1beta1/delegators/{}/redelegations",
			delegator_address
		);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}
}
