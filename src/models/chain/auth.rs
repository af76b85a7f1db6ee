//! Auth module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::PageResponse;

/// Auth module parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthParams {
	#[serde(default)]
	pub max_memo_characters: String,
	#[serde(default)]
	pub tx_sig_limit: String,
	#[serde(default)]
	pub tx_size_cost_per_byte: String,
	#[serde(default)]
	pub sig_verify_cost_ed25519: String,
	#[serde(default)]
	pub sig_verify_cost_secp256k1: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthModuleParamsResponse {
	#[serde(default)]
	pub params: AuthParams,
}

/// A base account as reported by the auth module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseAccount {
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub account_number: String,
	#[serde(default)]
	pub sequence: String,
	#[serde(default)]
	pub pub_key: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
	#[serde(default)]
	pub account: BaseAccount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsResponse {
	#[serde(default)]
	pub accounts: Vec<BaseAccount>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}
