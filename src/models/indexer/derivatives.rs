//! Derivative and binary options indexer payloads.

use serde::{Deserialize, Serialize};

use super::spot::TokenMeta;
use crate::models::core::Paging;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerpetualMarketInfo {
	#[serde(default)]
	pub hourly_funding_rate_cap: String,
	#[serde(default)]
	pub hourly_interest_rate: String,
	#[serde(default)]
	pub next_funding_timestamp: i64,
	#[serde(default)]
	pub funding_interval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerpetualMarketFunding {
	#[serde(default)]
	pub cumulative_funding: String,
	#[serde(default)]
	pub cumulative_price: String,
	#[serde(default)]
	pub last_timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeMarket {
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub market_status: String,
	#[serde(default)]
	pub ticker: String,
	#[serde(default)]
	pub oracle_base: String,
	#[serde(default)]
	pub oracle_quote: String,
	#[serde(default)]
	pub oracle_type: String,
	#[serde(default)]
	pub oracle_scale_factor: u32,
	#[serde(default)]
	pub initial_margin_ratio: String,
	#[serde(default)]
	pub maintenance_margin_ratio: String,
	#[serde(default)]
	pub quote_denom: String,
	#[serde(default)]
	pub quote_token_meta: Option<TokenMeta>,
	#[serde(default)]
	pub maker_fee_rate: String,
	#[serde(default)]
	pub taker_fee_rate: String,
	#[serde(default)]
	pub service_provider_fee: String,
	#[serde(default)]
	pub is_perpetual: bool,
	#[serde(default)]
	pub min_price_tick_size: String,
	#[serde(default)]
	pub min_quantity_tick_size: String,
	#[serde(default)]
	pub min_notional: String,
	#[serde(default)]
	pub perpetual_market_info: Option<PerpetualMarketInfo>,
	#[serde(default)]
	pub perpetual_market_funding: Option<PerpetualMarketFunding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeMarketsResponse {
	#[serde(default)]
	pub markets: Vec<DerivativeMarket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeMarketResponse {
	#[serde(default)]
	pub market: DerivativeMarket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinaryOptionsMarket {
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub market_status: String,
	#[serde(default)]
	pub ticker: String,
	#[serde(default)]
	pub oracle_symbol: String,
	#[serde(default)]
	pub oracle_provider: String,
	#[serde(default)]
	pub oracle_type: String,
	#[serde(default)]
	pub oracle_scale_factor: u32,
	#[serde(default)]
	pub expiration_timestamp: i64,
	#[serde(default)]
	pub settlement_timestamp: i64,
	#[serde(default)]
	pub quote_denom: String,
	#[serde(default)]
	pub quote_token_meta: Option<TokenMeta>,
	#[serde(default)]
	pub maker_fee_rate: String,
	#[serde(default)]
	pub taker_fee_rate: String,
	#[serde(default)]
	pub settlement_price: String,
	#[serde(default)]
	pub min_price_tick_size: String,
	#[serde(default)]
	pub min_quantity_tick_size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinaryOptionsMarketsResponse {
	#[serde(default)]
	pub markets: Vec<BinaryOptionsMarket>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinaryOptionsMarketResponse {
	#[serde(default)]
	pub market: BinaryOptionsMarket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeLimitOrder {
	#[serde(default)]
	pub order_hash: String,
	#[serde(default)]
	pub order_side: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub is_reduce_only: bool,
	#[serde(default)]
	pub margin: String,
	#[serde(default)]
	pub price: String,
	#[serde(default)]
	pub quantity: String,
	#[serde(default)]
	pub unfilled_quantity: String,
	#[serde(default)]
	pub trigger_price: String,
	#[serde(default)]
	pub fee_recipient: String,
	#[serde(default)]
	pub state: String,
	#[serde(default)]
	pub created_at: i64,
	#[serde(default)]
	pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeOrdersResponse {
	#[serde(default)]
	pub orders: Vec<DerivativeLimitOrder>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeOrderHistory {
	#[serde(default)]
	pub order_hash: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub execution_type: String,
	#[serde(default)]
	pub order_type: String,
	#[serde(default)]
	pub price: String,
	#[serde(default)]
	pub trigger_price: String,
	#[serde(default)]
	pub quantity: String,
	#[serde(default)]
	pub filled_quantity: String,
	#[serde(default)]
	pub state: String,
	#[serde(default)]
	pub created_at: i64,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub is_reduce_only: bool,
	#[serde(default)]
	pub direction: String,
	#[serde(default)]
	pub margin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeOrderHistoryResponse {
	#[serde(default)]
	pub orders: Vec<DerivativeOrderHistory>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativePosition {
	#[serde(default)]
	pub ticker: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub direction: String,
	#[serde(default)]
	pub quantity: String,
	#[serde(default)]
	pub entry_price: String,
	#[serde(default)]
	pub margin: String,
	#[serde(default)]
	pub liquidation_price: String,
	#[serde(default)]
	pub mark_price: String,
	#[serde(default)]
	pub aggregate_reduce_only_quantity: String,
	#[serde(default)]
	pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionsResponse {
	#[serde(default)]
	pub positions: Vec<DerivativePosition>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeTrade {
	#[serde(default)]
	pub order_hash: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub trade_execution_type: String,
	#[serde(default)]
	pub is_liquidation: bool,
	#[serde(default)]
	pub position_delta: Option<PositionDelta>,
	#[serde(default)]
	pub payout: String,
	#[serde(default)]
	pub fee: String,
	#[serde(default)]
	pub executed_at: i64,
	#[serde(default)]
	pub fee_recipient: String,
	#[serde(default)]
	pub trade_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionDelta {
	#[serde(default)]
	pub trade_direction: String,
	#[serde(default)]
	pub execution_price: String,
	#[serde(default)]
	pub execution_quantity: String,
	#[serde(default)]
	pub execution_margin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeTradesResponse {
	#[serde(default)]
	pub trades: Vec<DerivativeTrade>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingPayment {
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub amount: String,
	#[serde(default)]
	pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingPaymentsResponse {
	#[serde(default)]
	pub payments: Vec<FundingPayment>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingRate {
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub rate: String,
	#[serde(default)]
	pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingRatesResponse {
	#[serde(default)]
	pub funding_rates: Vec<FundingRate>,
	#[serde(default)]
	pub paging: Option<Paging>,
}
