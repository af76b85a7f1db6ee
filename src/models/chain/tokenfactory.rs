//! Token factory module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::Coin;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenFactoryParams {
	#[serde(default)]
	pub denom_creation_fee: Vec<Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenFactoryModuleParamsResponse {
	#[serde(default)]
	pub params: TokenFactoryParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenFactoryModuleStateResponse {
	#[serde(default)]
	pub state: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomsFromCreatorResponse {
	#[serde(default)]
	pub denoms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomAuthorityMetadata {
	#[serde(default)]
	pub admin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomAuthorityMetadataResponse {
	#[serde(default)]
	pub authority_metadata: DenomAuthorityMetadata,
}
