//! Trading strategies indexer payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridStrategy {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub account_address: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub strategy_type: String,
	#[serde(default)]
	pub state: String,
	#[serde(default)]
	pub lower_bound: String,
	#[serde(default)]
	pub upper_bound: String,
	#[serde(default)]
	pub grid_count: u32,
	#[serde(default)]
	pub base_quantity: String,
	#[serde(default)]
	pub quote_quantity: String,
	#[serde(default)]
	pub created_height: i64,
	#[serde(default)]
	pub removed_height: i64,
	#[serde(default)]
	pub created_at: i64,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub pnl: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridStrategiesResponse {
	#[serde(default)]
	pub strategies: Vec<GridStrategy>,
}
