//! Exchange chain module payloads.
//!
//! These are the on-chain exchange queries; the order/trade/market views
//! live in the indexer models.

use serde::{Deserialize, Serialize};

/// On-chain exchange module parameters (fee rates and deposit bounds).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeParams {
	#[serde(default)]
	pub spot_market_instant_listing_fee: Option<serde_json::Value>,
	#[serde(default)]
	pub default_spot_maker_fee_rate: String,
	#[serde(default)]
	pub default_spot_taker_fee_rate: String,
	#[serde(default)]
	pub default_derivative_maker_fee_rate: String,
	#[serde(default)]
	pub default_derivative_taker_fee_rate: String,
	#[serde(default)]
	pub default_initial_margin_ratio: String,
	#[serde(default)]
	pub default_maintenance_margin_ratio: String,
	#[serde(default)]
	pub default_funding_interval: String,
	#[serde(default)]
	pub trading_rewards_vesting_duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeModuleParamsResponse {
	#[serde(default)]
	pub params: ExchangeParams,
}

/// Full exchange module state dump. The schema is the module genesis state
/// and is passed through opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeModuleStateResponse {
	#[serde(default)]
	pub state: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeDiscountTierInfo {
	#[serde(default)]
	pub maker_discount_rate: String,
	#[serde(default)]
	pub taker_discount_rate: String,
	#[serde(default)]
	pub staked_amount: String,
	#[serde(default)]
	pub volume: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeDiscountSchedule {
	#[serde(default)]
	pub bucket_count: String,
	#[serde(default)]
	pub bucket_duration: String,
	#[serde(default)]
	pub quote_denoms: Vec<String>,
	#[serde(default)]
	pub tier_infos: Vec<FeeDiscountTierInfo>,
	#[serde(default)]
	pub disqualified_market_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeDiscountScheduleResponse {
	#[serde(default)]
	pub fee_discount_schedule: FeeDiscountSchedule,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeDiscountAccountInfo {
	#[serde(default)]
	pub tier_level: String,
	#[serde(default)]
	pub account_info: Option<FeeDiscountTierInfo>,
	#[serde(default)]
	pub account_ttl: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingRewardsCampaignResponse {
	#[serde(default)]
	pub trading_reward_campaign_info: Option<serde_json::Value>,
	#[serde(default)]
	pub trading_reward_pool_campaign_schedule: Vec<serde_json::Value>,
	#[serde(default)]
	pub total_trade_reward_points: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeRewardPointsResponse {
	#[serde(default)]
	pub account_trade_reward_points: Vec<String>,
}

/// An open on-chain derivative position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainDerivativePosition {
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub position: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangePositionsResponse {
	#[serde(default)]
	pub state: Vec<ChainDerivativePosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountTradeNonceResponse {
	#[serde(default)]
	pub nonce: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsOptedOutOfRewardsResponse {
	#[serde(default)]
	pub is_opted_out: bool,
}
