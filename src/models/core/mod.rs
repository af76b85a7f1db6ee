//! Core wire shapes shared across backend modules.
//!
//! The chain gateway and the indexer agree on a handful of primitives
//! (denominated amounts, pagination envelopes); everything else is module
//! specific and lives under `models::chain` / `models::indexer`.

use serde::{Deserialize, Serialize};

/// A denominated token amount.
///
/// Amounts are decimal strings on the wire and are passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
	pub denom: String,
	pub amount: String,
}

/// Pagination envelope returned by chain gateway list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
	#[serde(default)]
	pub next_key: Option<String>,
	#[serde(default)]
	pub total: Option<String>,
}

/// Pagination request for chain gateway list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
	#[serde(default)]
	pub key: Option<String>,
	#[serde(default)]
	pub limit: Option<u64>,
}

impl PageRequest {
	/// Renders the request as gateway query parameters.
	pub fn to_query(&self) -> Vec<(String, String)> {
		let mut query = Vec::new();
		if let Some(key) = &self.key {
			query.push(("pagination.key".to_string(), key.clone()));
		}
		if let Some(limit) = self.limit {
			query.push(("pagination.limit".to_string(), limit.to_string()));
		}
		query
	}
}

/// Pagination envelope returned by indexer list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
	#[serde(default)]
	pub total: Option<i64>,
	#[serde(default)]
	pub from: Option<i32>,
	#[serde(default)]
	pub to: Option<i32>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_coin_round_trip() {
		let json = r#"{"denom":"inj","amount":"1000000000000000000"}"#;
		let coin: Coin = serde_json::from_str(json).unwrap();
		assert_eq!(coin.denom, "inj");
		assert_eq!(coin.amount, "1000000000000000000");
		assert_eq!(serde_json::to_string(&coin).unwrap(), json);
	}

	#[test]
	fn test_page_request_to_query() {
		let empty = PageRequest::default();
		assert!(empty.to_query().is_empty());

		let request = PageRequest {
			key: Some("abc".to_string()),
			limit: Some(50),
		};
		let query = request.to_query();
		assert_eq!(query.len(), 2);
		assert!(query.contains(&("pagination.key".to_string(), "abc".to_string())));
		assert!(query.contains(&("pagination.limit".to_string(), "50".to_string())));
	}

	#[test]
	fn test_paging_tolerates_missing_fields() {
		let paging: Paging = serde_json::from_str("{}").unwrap();
		assert_eq!(paging, Paging::default());
	}
}
