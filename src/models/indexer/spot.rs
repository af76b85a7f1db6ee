//! Spot exchange indexer payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::Paging;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMeta {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub symbol: String,
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub decimals: i32,
	#[serde(default)]
	pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotMarket {
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub market_status: String,
	#[serde(default)]
	pub ticker: String,
	#[serde(default)]
	pub base_denom: String,
	#[serde(default)]
	pub quote_denom: String,
	#[serde(default)]
	pub base_token_meta: Option<TokenMeta>,
	#[serde(default)]
	pub quote_token_meta: Option<TokenMeta>,
	#[serde(default)]
	pub maker_fee_rate: String,
	#[serde(default)]
	pub taker_fee_rate: String,
	#[serde(default)]
	pub service_provider_fee: String,
	#[serde(default)]
	pub min_price_tick_size: String,
	#[serde(default)]
	pub min_quantity_tick_size: String,
	#[serde(default)]
	pub min_notional: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotMarketsResponse {
	#[serde(default)]
	pub markets: Vec<SpotMarket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotMarketResponse {
	#[serde(default)]
	pub market: SpotMarket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotLimitOrder {
	#[serde(default)]
	pub order_hash: String,
	#[serde(default)]
	pub order_side: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub subaccount_id: String,
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
pub struct SpotOrdersResponse {
	#[serde(default)]
	pub orders: Vec<SpotLimitOrder>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotOrderHistory {
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
	pub direction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotOrderHistoryResponse {
	#[serde(default)]
	pub orders: Vec<SpotOrderHistory>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotTrade {
	#[serde(default)]
	pub order_hash: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub trade_execution_type: String,
	#[serde(default)]
	pub trade_direction: String,
	#[serde(default)]
	pub price: Option<PriceAtExecution>,
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
pub struct PriceAtExecution {
	#[serde(default)]
	pub price: String,
	#[serde(default)]
	pub quantity: String,
	#[serde(default)]
	pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotTradesResponse {
	#[serde(default)]
	pub trades: Vec<SpotTrade>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomicSwap {
	#[serde(default)]
	pub sender: String,
	#[serde(default)]
	pub route: String,
	#[serde(default)]
	pub source_coin: Option<crate::models::core::Coin>,
	#[serde(default)]
	pub dest_coin: Option<crate::models::core::Coin>,
	#[serde(default)]
	pub fees: Vec<crate::models::core::Coin>,
	#[serde(default)]
	pub contract_address: String,
	#[serde(default)]
	pub index_by_sender: i32,
	#[serde(default)]
	pub index_by_sender_contract: i32,
	#[serde(default)]
	pub tx_hash: String,
	#[serde(default)]
	pub executed_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomicSwapHistoryResponse {
	#[serde(default)]
	pub swap_history: Vec<AtomicSwap>,
	#[serde(default)]
	pub paging: Option<Paging>,
}
