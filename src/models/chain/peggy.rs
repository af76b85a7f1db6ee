//! Peggy (ethereum bridge) module payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeggyParams {
	#[serde(default)]
	pub peggy_id: String,
	#[serde(default)]
	pub contract_source_hash: String,
	#[serde(default)]
	pub bridge_ethereum_address: String,
	#[serde(default)]
	pub bridge_chain_id: String,
	#[serde(default)]
	pub signed_valsets_window: String,
	#[serde(default)]
	pub signed_batches_window: String,
	#[serde(default)]
	pub signed_claims_window: String,
	#[serde(default)]
	pub average_block_time: String,
	#[serde(default)]
	pub average_ethereum_block_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeggyModuleParamsResponse {
	#[serde(default)]
	pub params: PeggyParams,
}
