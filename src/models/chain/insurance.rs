//! Insurance fund module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::Coin;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceParams {
	#[serde(default)]
	pub default_redemption_notice_period_duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceModuleParamsResponse {
	#[serde(default)]
	pub params: InsuranceParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceFund {
	#[serde(default)]
	pub deposit_denom: String,
	#[serde(default)]
	pub insurance_pool_token_denom: String,
	#[serde(default)]
	pub redemption_notice_period_duration: String,
	#[serde(default)]
	pub balance: String,
	#[serde(default)]
	pub total_share: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub market_ticker: String,
	#[serde(default)]
	pub oracle_base: String,
	#[serde(default)]
	pub oracle_quote: String,
	#[serde(default)]
	pub oracle_type: String,
	#[serde(default)]
	pub expiry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceFundsResponse {
	#[serde(default)]
	pub insurance_funds: Vec<InsuranceFund>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceFundResponse {
	#[serde(default)]
	pub fund: Option<InsuranceFund>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedRedemptionsResponse {
	#[serde(default)]
	pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PendingRedemptionsResponse {
	#[serde(default)]
	pub amount: Vec<Coin>,
}
