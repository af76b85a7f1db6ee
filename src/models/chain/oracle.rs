//! Oracle chain module payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleParams {
	#[serde(default)]
	pub pyth_contract: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleModuleParamsResponse {
	#[serde(default)]
	pub params: OracleParams,
}
