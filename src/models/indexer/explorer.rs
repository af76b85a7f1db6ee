//! Explorer indexer payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::Paging;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerTx {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub block_number: i64,
	#[serde(default)]
	pub block_timestamp: String,
	#[serde(default)]
	pub hash: String,
	#[serde(default)]
	pub code: u32,
	#[serde(default)]
	pub memo: String,
	#[serde(default)]
	pub tx_type: String,
	#[serde(default)]
	pub gas_wanted: i64,
	#[serde(default)]
	pub gas_used: i64,
	#[serde(default)]
	pub gas_fee: Option<serde_json::Value>,
	#[serde(default)]
	pub messages: Vec<serde_json::Value>,
	#[serde(default)]
	pub signatures: Vec<serde_json::Value>,
	#[serde(default)]
	pub error_log: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxsResponse {
	#[serde(default)]
	pub data: Vec<ExplorerTx>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerValidatorUptime {
	#[serde(default)]
	pub block_number: i64,
	#[serde(default)]
	pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerValidator {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub moniker: String,
	#[serde(default)]
	pub operator_address: String,
	#[serde(default)]
	pub consensus_address: String,
	#[serde(default)]
	pub jailed: bool,
	#[serde(default)]
	pub status: i32,
	#[serde(default)]
	pub tokens: String,
	#[serde(default)]
	pub delegator_shares: String,
	#[serde(default)]
	pub commission_rate: String,
	#[serde(default)]
	pub uptime_percentage: f64,
	#[serde(default)]
	pub uptimes: Vec<ExplorerValidatorUptime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerValidatorResponse {
	#[serde(default)]
	pub data: ExplorerValidator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorUptimeResponse {
	#[serde(default)]
	pub data: Vec<ExplorerValidatorUptime>,
}

/// A peggy bridge transfer as seen by the explorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeggyTx {
	#[serde(default)]
	pub sender: String,
	#[serde(default)]
	pub receiver: String,
	#[serde(default)]
	pub event_nonce: i64,
	#[serde(default)]
	pub event_height: i64,
	#[serde(default)]
	pub amount: String,
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub orchestrator_address: String,
	#[serde(default)]
	pub state: String,
	#[serde(default)]
	pub tx_hashes: Vec<String>,
	#[serde(default)]
	pub created_at: String,
	#[serde(default)]
	pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeggyDepositTxsResponse {
	#[serde(default)]
	pub field: Vec<PeggyTx>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeggyWithdrawalTxsResponse {
	#[serde(default)]
	pub field: Vec<PeggyTx>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerBlock {
	#[serde(default)]
	pub height: i64,
	#[serde(default)]
	pub proposer: String,
	#[serde(default)]
	pub moniker: String,
	#[serde(default)]
	pub block_hash: String,
	#[serde(default)]
	pub parent_hash: String,
	#[serde(default)]
	pub num_pre_commits: i32,
	#[serde(default)]
	pub num_txs: i32,
	#[serde(default)]
	pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlocksResponse {
	#[serde(default)]
	pub data: Vec<ExplorerBlock>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockResponse {
	#[serde(default)]
	pub data: ExplorerBlock,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IbcTransferTx {
	#[serde(default)]
	pub sender: String,
	#[serde(default)]
	pub receiver: String,
	#[serde(default)]
	pub source_port: String,
	#[serde(default)]
	pub source_channel: String,
	#[serde(default)]
	pub destination_port: String,
	#[serde(default)]
	pub destination_channel: String,
	#[serde(default)]
	pub amount: String,
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub timeout_height: String,
	#[serde(default)]
	pub timeout_timestamp: i64,
	#[serde(default)]
	pub packet_sequence: i64,
	#[serde(default)]
	pub state: String,
	#[serde(default)]
	pub tx_hashes: Vec<String>,
	#[serde(default)]
	pub created_at: String,
	#[serde(default)]
	pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IbcTransferTxsResponse {
	#[serde(default)]
	pub field: Vec<IbcTransferTx>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerStatsResponse {
	#[serde(default)]
	pub assets: String,
	#[serde(default)]
	pub txs_total: String,
	#[serde(default)]
	pub addresses: String,
	#[serde(default)]
	pub inj_supply: String,
	#[serde(default)]
	pub txs_in_past_30_days: String,
	#[serde(default)]
	pub txs_in_past_24_hours: String,
	#[serde(default)]
	pub block_count_in_past_24_hours: String,
	#[serde(default)]
	pub tx_per_second_in_past_24_hours: String,
	#[serde(default)]
	pub tx_per_second_in_past_100_blocks: String,
}
