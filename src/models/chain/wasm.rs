//! CosmWasm module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::PageResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
	#[serde(default)]
	pub code_id: String,
	#[serde(default)]
	pub creator: String,
	#[serde(default)]
	pub admin: String,
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub created: Option<serde_json::Value>,
	#[serde(default)]
	pub ibc_port_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractInfoResponse {
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub contract_info: ContractInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractHistoryEntry {
	#[serde(default)]
	pub operation: String,
	#[serde(default)]
	pub code_id: String,
	#[serde(default)]
	pub updated: Option<serde_json::Value>,
	#[serde(default)]
	pub msg: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractHistoryResponse {
	#[serde(default)]
	pub entries: Vec<ContractHistoryEntry>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

/// Raw contract store lookup. `data` is base64 over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawContractStateResponse {
	#[serde(default)]
	pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartContractStateResponse {
	#[serde(default)]
	pub data: serde_json::Value,
}

/// One raw key/value pair of contract storage. Both sides are base64.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractStateEntry {
	#[serde(default)]
	pub key: String,
	#[serde(default)]
	pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractStateResponse {
	#[serde(default)]
	pub models: Vec<ContractStateEntry>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeInfo {
	#[serde(default)]
	pub code_id: String,
	#[serde(default)]
	pub creator: String,
	#[serde(default)]
	pub data_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractCodesResponse {
	#[serde(default)]
	pub code_infos: Vec<CodeInfo>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractCodeResponse {
	#[serde(default)]
	pub code_info: CodeInfo,
	#[serde(default)]
	pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractsByCodeResponse {
	#[serde(default)]
	pub contracts: Vec<String>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}
