//! Oracle prices as seen by the indexer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OraclePrice {
	#[serde(default)]
	pub symbol: String,
	#[serde(default)]
	pub base_symbol: String,
	#[serde(default)]
	pub quote_symbol: String,
	#[serde(default)]
	pub oracle_type: String,
	#[serde(default)]
	pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleListResponse {
	#[serde(default)]
	pub oracles: Vec<OraclePrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OraclePriceResponse {
	#[serde(default)]
	pub price: String,
}
