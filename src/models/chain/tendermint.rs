//! Tendermint service payloads (latest block, node info, sync state).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockId {
	#[serde(default)]
	pub hash: String,
	#[serde(default)]
	pub part_set_header: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockHeader {
	#[serde(default)]
	pub chain_id: String,
	#[serde(default)]
	pub height: String,
	#[serde(default)]
	pub time: String,
	#[serde(default)]
	pub last_block_id: Option<BlockId>,
	#[serde(default)]
	pub app_hash: String,
	#[serde(default)]
	pub proposer_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
	#[serde(default)]
	pub header: BlockHeader,
	#[serde(default)]
	pub data: Option<serde_json::Value>,
	#[serde(default)]
	pub evidence: Option<serde_json::Value>,
	#[serde(default)]
	pub last_commit: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestBlockResponse {
	#[serde(default)]
	pub block_id: Option<BlockId>,
	#[serde(default)]
	pub block: Block,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeVersionInfo {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub app_name: String,
	#[serde(default)]
	pub version: String,
	#[serde(default)]
	pub git_commit: String,
	#[serde(default)]
	pub go_version: String,
	#[serde(default)]
	pub cosmos_sdk_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeInfoResponse {
	#[serde(default)]
	pub default_node_info: Option<serde_json::Value>,
	#[serde(default)]
	pub application_version: Option<NodeVersionInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncingResponse {
	#[serde(default)]
	pub syncing: bool,
}
