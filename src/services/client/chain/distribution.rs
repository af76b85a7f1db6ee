//! Distribution chain module client.

use std::sync::Arc;

use crate::{
	models::chain::{
		DelegationRewardResponse, DelegatorRewardsResponse, DistributionModuleParamsResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct DistributionClient {
	transport: Arc<dyn GatewayTransport>,
}

impl DistributionClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(
		&self,
	) -> Result<DistributionModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/distribution/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_delegator_rewards_for_validator(
		&self,
		delegator_address: &str,
		validator_address: &str,
	) -> Result<DelegationRewardResponse, TransportError> {
		let path = format!(
			"/cosmos/distribution/v1beta1/delegators/{}/rewards/{}",
			delegator_address, validator_address
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_delegator_rewards(
		&self,
		delegator_address: &str,
	) -> Result<DelegatorRewardsResponse, TransportError> {
		let path = format!(
			"/cosmos/distribution/v1beta1/delegators/{}/rewards",
			delegator_address
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
