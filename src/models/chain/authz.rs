//! Authz module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::PageResponse;

/// A single authorization grant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grant {
	#[serde(default)]
	pub granter: Option<String>,
	#[serde(default)]
	pub grantee: Option<String>,
	#[serde(default)]
	pub authorization: serde_json::Value,
	#[serde(default)]
	pub expiration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrantsResponse {
	#[serde(default)]
	pub grants: Vec<Grant>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}
