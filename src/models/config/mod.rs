//! Network selection and endpoint resolution.
//!
//! Maps a [`NetworkSelector`] to the concrete endpoints of the backend
//! services: the chain gateway, the indexer and the REST (LCD) API. The
//! mapping is a pure lookup table with no I/O; it runs exactly once, at
//! client construction, and the resulting [`EndpointSet`] is shared
//! read-only by every module client.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use url::Url;

/// The networks the client can be constructed against.
///
/// Chosen at construction and immutable for the client's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkSelector {
	/// Injective mainnet (sentry load-balanced endpoints)
	Mainnet,
	/// Public testnet
	Testnet,
	/// Developer network
	Devnet,
	/// A locally running chain and indexer
	LocalNet,
}

impl fmt::Display for NetworkSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Mainnet => "Mainnet",
			Self::Testnet => "Testnet",
			Self::Devnet => "Devnet",
			Self::LocalNet => "LocalNet",
		};
		write!(f, "{}", name)
	}
}

impl FromStr for NetworkSelector {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Mainnet" | "mainnet" => Ok(Self::Mainnet),
			"Testnet" | "testnet" => Ok(Self::Testnet),
			"Devnet" | "devnet" => Ok(Self::Devnet),
			"LocalNet" | "localnet" | "local" => Ok(Self::LocalNet),
			other => Err(ConfigError::unknown_network(
				other.to_string(),
				None,
				None,
			)),
		}
	}
}

/// The three backend endpoints every module client binds against.
///
/// Derived deterministically from a [`NetworkSelector`]; never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
	/// Chain module gateway endpoint
	pub grpc: Url,
	/// Off-chain indexer endpoint
	pub indexer: Url,
	/// REST (LCD) endpoint
	pub rest: Url,
}

impl EndpointSet {
	/// Resolves the endpoints for a network.
	///
	/// Total over the selector enum; an unrecognized network name can only
	/// exist before parsing and fails there with
	/// [`ConfigError::UnknownNetwork`].
	pub fn resolve(selector: NetworkSelector) -> Self {
		let (grpc, indexer, rest) = match selector {
			NetworkSelector::Mainnet => (
				"https://sentry.chain.grpc.injective.network:443",
				"https://sentry.exchange.grpc.injective.network:443",
				"https://sentry.lcd.injective.network:443",
			),
			NetworkSelector::Testnet => (
				"https://testnet.sentry.chain.grpc.injective.network:443",
				"https://testnet.sentry.exchange.grpc.injective.network:443",
				"https://testnet.sentry.lcd.injective.network:443",
			),
			NetworkSelector::Devnet => (
				"https://devnet.chain.grpc.injective.dev:443",
				"https://devnet.indexer.injective.dev:443",
				"https://devnet.lcd.injective.dev:443",
			),
			NetworkSelector::LocalNet => (
				"http://localhost:9900",
				"http://localhost:9910",
				"http://localhost:10337",
			),
		};

		// The table above is static and every entry parses; a failure here is
		// a programming error, not an input error.
		Self {
			grpc: Url::parse(grpc).expect("static endpoint table entry must parse"),
			indexer: Url::parse(indexer).expect("static endpoint table entry must parse"),
			rest: Url::parse(rest).expect("static endpoint table entry must parse"),
		}
	}

	/// Builds an endpoint set from explicit URLs.
	///
	/// Used for tests and custom deployments that are not covered by the
	/// static selector table.
	pub fn from_urls(grpc: &str, indexer: &str, rest: &str) -> Result<Self, ConfigError> {
		let parse = |name: &str, value: &str| {
			Url::parse(value).map_err(|e| {
				ConfigError::validation_error(
					format!("Invalid {} endpoint URL", name),
					Some(Box::new(e)),
					None,
				)
			})
		};

		Ok(Self {
			grpc: parse("grpc", grpc)?,
			indexer: parse("indexer", indexer)?,
			rest: parse("rest", rest)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_all_selectors() {
		for selector in [
			NetworkSelector::Mainnet,
			NetworkSelector::Testnet,
			NetworkSelector::Devnet,
			NetworkSelector::LocalNet,
		] {
			let endpoints = EndpointSet::resolve(selector);
			assert!(!endpoints.grpc.as_str().is_empty());
			assert!(!endpoints.indexer.as_str().is_empty());
			assert!(!endpoints.rest.as_str().is_empty());
		}
	}

	#[test]
	fn test_resolve_is_deterministic() {
		assert_eq!(
			EndpointSet::resolve(NetworkSelector::Testnet),
			EndpointSet::resolve(NetworkSelector::Testnet)
		);
	}

	#[test]
	fn test_selector_from_str() {
		assert_eq!(
			"Mainnet".parse::<NetworkSelector>().unwrap(),
			NetworkSelector::Mainnet
		);
		assert_eq!(
			"testnet".parse::<NetworkSelector>().unwrap(),
			NetworkSelector::Testnet
		);
		assert_eq!(
			"LocalNet".parse::<NetworkSelector>().unwrap(),
			NetworkSelector::LocalNet
		);
	}

	#[test]
	fn test_selector_from_str_unknown() {
		let err = "Nonexistent".parse::<NetworkSelector>().unwrap_err();
		assert!(matches!(err, ConfigError::UnknownNetwork(_)));
		assert_eq!(err.to_string(), "Unknown network: Nonexistent");
	}

	#[test]
	fn test_from_urls_rejects_malformed() {
		let err = EndpointSet::from_urls("not a url", "http://localhost:1", "http://localhost:2")
			.unwrap_err();
		assert!(matches!(err, ConfigError::ValidationError(_)));
	}

	#[test]
	fn test_selector_display_round_trip() {
		for selector in [
			NetworkSelector::Mainnet,
			NetworkSelector::Testnet,
			NetworkSelector::Devnet,
			NetworkSelector::LocalNet,
		] {
			let parsed: NetworkSelector = selector.to_string().parse().unwrap();
			assert_eq!(parsed, selector);
		}
	}
}
