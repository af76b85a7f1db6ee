//! Orderbook shapes shared by the spot and derivative indexer services.

use serde::{Deserialize, Serialize};

/// One aggregated price level. Quantities are decimal strings in chain format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
	#[serde(default)]
	pub price: String,
	#[serde(default)]
	pub quantity: String,
	#[serde(default)]
	pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Orderbook {
	#[serde(default)]
	pub sequence: String,
	#[serde(default)]
	pub buys: Vec<PriceLevel>,
	#[serde(default)]
	pub sells: Vec<PriceLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderbookResponse {
	#[serde(default)]
	pub orderbook: Orderbook,
}

/// Orderbook keyed by market, as returned by the bulk orderbook queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderbook {
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub orderbook: Orderbook,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderbooksResponse {
	#[serde(default)]
	pub orderbooks: Vec<MarketOrderbook>,
}
