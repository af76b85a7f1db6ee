//! Staking module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::PageResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakingParams {
	#[serde(default)]
	pub unbonding_time: String,
	#[serde(default)]
	pub max_validators: u32,
	#[serde(default)]
	pub max_entries: u32,
	#[serde(default)]
	pub historical_entries: u32,
	#[serde(default)]
	pub bond_denom: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakingModuleParamsResponse {
	#[serde(default)]
	pub params: StakingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakingPool {
	#[serde(default)]
	pub not_bonded_tokens: String,
	#[serde(default)]
	pub bonded_tokens: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakingPoolResponse {
	#[serde(default)]
	pub pool: StakingPool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorDescription {
	#[serde(default)]
	pub moniker: String,
	#[serde(default)]
	pub identity: String,
	#[serde(default)]
	pub website: String,
	#[serde(default)]
	pub security_contact: String,
	#[serde(default)]
	pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorCommissionRates {
	#[serde(default)]
	pub rate: String,
	#[serde(default)]
	pub max_rate: String,
	#[serde(default)]
	pub max_change_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorCommission {
	#[serde(default)]
	pub commission_rates: ValidatorCommissionRates,
	#[serde(default)]
	pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validator {
	#[serde(default)]
	pub operator_address: String,
	#[serde(default)]
	pub consensus_pubkey: Option<serde_json::Value>,
	#[serde(default)]
	pub jailed: bool,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub tokens: String,
	#[serde(default)]
	pub delegator_shares: String,
	#[serde(default)]
	pub description: ValidatorDescription,
	#[serde(default)]
	pub unbonding_height: String,
	#[serde(default)]
	pub unbonding_time: String,
	#[serde(default)]
	pub commission: ValidatorCommission,
	#[serde(default)]
	pub min_self_delegation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorsResponse {
	#[serde(default)]
	pub validators: Vec<Validator>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorResponse {
	#[serde(default)]
	pub validator: Validator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delegation {
	#[serde(default)]
	pub delegator_address: String,
	#[serde(default)]
	pub validator_address: String,
	#[serde(default)]
	pub shares: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelegationEntry {
	#[serde(default)]
	pub delegation: Delegation,
	#[serde(default)]
	pub balance: Option<crate::models::core::Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelegationsResponse {
	#[serde(default)]
	pub delegation_responses: Vec<DelegationEntry>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnbondingDelegationEntry {
	#[serde(default)]
	pub creation_height: String,
	#[serde(default)]
	pub completion_time: String,
	#[serde(default)]
	pub initial_balance: String,
	#[serde(default)]
	pub balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnbondingDelegation {
	#[serde(default)]
	pub delegator_address: String,
	#[serde(default)]
	pub validator_address: String,
	#[serde(default)]
	pub entries: Vec<UnbondingDelegationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnbondingDelegationsResponse {
	#[serde(default)]
	pub unbonding_responses: Vec<UnbondingDelegation>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedelegationEntry {
	#[serde(default)]
	pub creation_height: String,
	#[serde(default)]
	pub completion_time: String,
	#[serde(default)]
	pub initial_balance: String,
	#[serde(default)]
	pub shares_dst: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Redelegation {
	#[serde(default)]
	pub delegator_address: String,
	#[serde(default)]
	pub validator_src_address: String,
	#[serde(default)]
	pub validator_dst_address: String,
	#[serde(default)]
	pub entries: Vec<RedelegationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedelegationsResponse {
	#[serde(default)]
	pub redelegation_responses: Vec<serde_json::Value>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}
