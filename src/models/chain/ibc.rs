//! IBC transfer module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::PageResponse;

/// The provenance of an IBC voucher denom.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomTrace {
	#[serde(default)]
	pub path: String,
	#[serde(default)]
	pub base_denom: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomTraceResponse {
	#[serde(default)]
	pub denom_trace: DenomTrace,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomTracesResponse {
	#[serde(default)]
	pub denom_traces: Vec<DenomTrace>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}
