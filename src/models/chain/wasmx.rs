//! WasmX module payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WasmxParams {
	#[serde(default)]
	pub is_execution_enabled: bool,
	#[serde(default)]
	pub max_begin_block_total_gas: String,
	#[serde(default)]
	pub max_contract_gas_limit: String,
	#[serde(default)]
	pub min_gas_price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WasmxModuleParamsResponse {
	#[serde(default)]
	pub params: WasmxParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WasmxModuleStateResponse {
	#[serde(default)]
	pub state: serde_json::Value,
}
