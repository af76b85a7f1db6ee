//! Mint module payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MintParams {
	#[serde(default)]
	pub mint_denom: String,
	#[serde(default)]
	pub inflation_rate_change: String,
	#[serde(default)]
	pub inflation_max: String,
	#[serde(default)]
	pub inflation_min: String,
	#[serde(default)]
	pub goal_bonded: String,
	#[serde(default)]
	pub blocks_per_year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MintModuleParamsResponse {
	#[serde(default)]
	pub params: MintParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InflationResponse {
	#[serde(default)]
	pub inflation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualProvisionsResponse {
	#[serde(default)]
	pub annual_provisions: String,
}
