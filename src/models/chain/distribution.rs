//! Distribution module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::Coin;

/// Distribution module parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionParams {
	#[serde(default)]
	pub community_tax: String,
	#[serde(default)]
	pub base_proposer_reward: String,
	#[serde(default)]
	pub bonus_proposer_reward: String,
	#[serde(default)]
	pub withdraw_addr_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionModuleParamsResponse {
	#[serde(default)]
	pub params: DistributionParams,
}

/// Pending rewards accrued with a single validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelegationRewardResponse {
	#[serde(default)]
	pub rewards: Vec<Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorReward {
	#[serde(default)]
	pub validator_address: String,
	#[serde(default)]
	pub reward: Vec<Coin>,
}

/// Pending rewards across every validator the delegator stakes with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelegatorRewardsResponse {
	#[serde(default)]
	pub rewards: Vec<ValidatorReward>,
	#[serde(default)]
	pub total: Vec<Coin>,
}
