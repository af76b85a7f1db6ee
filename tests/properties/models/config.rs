use injective_client::models::{EndpointSet, NetworkSelector};
use proptest::{prelude::*, test_runner::Config};

fn selector_strategy() -> impl Strategy<Value = NetworkSelector> {
	prop_oneof![
		Just(NetworkSelector::Mainnet),
		Just(NetworkSelector::Testnet),
		Just(NetworkSelector::Devnet),
		Just(NetworkSelector::LocalNet),
	]
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Totality: every selector resolves to a complete endpoint set.
	#[test]
	fn test_resolver_is_total(selector in selector_strategy()) {
		let endpoints = EndpointSet::resolve(selector);
		prop_assert!(endpoints.grpc.has_host());
		prop_assert!(endpoints.indexer.has_host());
		prop_assert!(endpoints.rest.has_host());
	}

	#[test]
	fn test_resolver_is_deterministic(selector in selector_strategy()) {
		prop_assert_eq!(EndpointSet::resolve(selector), EndpointSet::resolve(selector));
	}

	#[test]
	fn test_selector_display_parse_round_trip(selector in selector_strategy()) {
		let parsed: NetworkSelector = selector.to_string().parse().unwrap();
		prop_assert_eq!(parsed, selector);
	}

	// Any name outside the known set fails at parse, before any endpoint
	// or registry work happens.
	#[test]
	fn test_unknown_names_fail_at_parse(name in "[A-Za-z0-9]{1,20}") {
		let known = [
			"Mainnet", "mainnet", "Testnet", "testnet",
			"Devnet", "devnet", "LocalNet", "localnet", "local",
		];
		prop_assume!(!known.contains(&name.as_str()));

		let result = name.parse::<NetworkSelector>();
		prop_assert!(result.is_err());
		prop_assert_eq!(
			result.unwrap_err().to_string(),
			format!("Unknown network: {}", name)
		);
	}
}
