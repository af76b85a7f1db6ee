//! Bank module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::{Coin, PageResponse};

/// Bank module parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankParams {
	#[serde(default)]
	pub default_send_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankModuleParamsResponse {
	#[serde(default)]
	pub params: BankParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
	#[serde(default)]
	pub balance: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalancesResponse {
	#[serde(default)]
	pub balances: Vec<Coin>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalSupplyResponse {
	#[serde(default)]
	pub supply: Vec<Coin>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyOfResponse {
	#[serde(default)]
	pub amount: Coin,
}

/// One unit of a token's denomination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomUnit {
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub exponent: u32,
	#[serde(default)]
	pub aliases: Vec<String>,
}

/// On-chain metadata describing a token denomination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomMetadata {
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub denom_units: Vec<DenomUnit>,
	#[serde(default)]
	pub base: String,
	#[serde(default)]
	pub display: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomMetadataResponse {
	#[serde(default)]
	pub metadata: DenomMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomsMetadataResponse {
	#[serde(default)]
	pub metadatas: Vec<DenomMetadata>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomOwner {
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub balance: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomOwnersResponse {
	#[serde(default)]
	pub denom_owners: Vec<DenomOwner>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}
