//! Insurance funds as seen by the indexer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerInsuranceFund {
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub market_ticker: String,
	#[serde(default)]
	pub deposit_denom: String,
	#[serde(default)]
	pub pool_token_denom: String,
	#[serde(default)]
	pub redemption_notice_period_duration: i64,
	#[serde(default)]
	pub balance: String,
	#[serde(default)]
	pub total_share: String,
	#[serde(default)]
	pub oracle_base: String,
	#[serde(default)]
	pub oracle_quote: String,
	#[serde(default)]
	pub oracle_type: String,
	#[serde(default)]
	pub expiry: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerInsuranceFundsResponse {
	#[serde(default)]
	pub funds: Vec<IndexerInsuranceFund>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRedemption {
	#[serde(default)]
	pub redemption_id: i64,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub redeemer: String,
	#[serde(default)]
	pub claimable_redemption_time: i64,
	#[serde(default)]
	pub redemption_amount: String,
	#[serde(default)]
	pub redemption_denom: String,
	#[serde(default)]
	pub requested_at: i64,
	#[serde(default)]
	pub disbursed_amount: String,
	#[serde(default)]
	pub disbursed_denom: String,
	#[serde(default)]
	pub disbursed_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRedemptionsResponse {
	#[serde(default)]
	pub redemption_schedules: Vec<InsuranceRedemption>,
}
