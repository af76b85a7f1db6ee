//! Facade construction and end-to-end query behavior.

use mockito::{Matcher, Server};
use serde_json::json;

use injective_client::{
	models::{ConfigError, EndpointSet, NetworkSelector, SecretString},
	services::client::InjectiveClient,
};

const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn test_client_against(server: &Server) -> InjectiveClient {
	let url = server.url();
	let endpoints = EndpointSet::from_urls(&url, &url, &url).unwrap();
	let key = SecretString::from(TEST_KEY);
	InjectiveClient::with_endpoints(NetworkSelector::LocalNet, endpoints, Some(&key), None)
		.unwrap()
}

#[test]
fn test_construction_on_known_network_derives_identity() {
	let key = SecretString::from(TEST_KEY);
	let client = InjectiveClient::new(NetworkSelector::Testnet, Some(&key), None).unwrap();

	assert_eq!(
		client.identity().source_address,
		"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
	);
	assert_eq!(
		client.identity().derived_address,
		"inj17w0adeg64ky0daxwd2ugyuneellmjgnxf5vkec"
	);

	let info = client.network_info();
	assert_eq!(info.network, NetworkSelector::Testnet);
	assert_eq!(info.endpoints, EndpointSet::resolve(NetworkSelector::Testnet));
}

#[test]
fn test_unrecognized_network_name_fails_before_construction() {
	// Parsing is the only place an unknown network name can appear; no
	// client or registry is ever built from it.
	let err = "Nonexistent".parse::<NetworkSelector>().unwrap_err();
	assert!(matches!(err, ConfigError::UnknownNetwork(_)));
	assert_eq!(err.to_string(), "Unknown network: Nonexistent");
}

#[test]
fn test_construction_rejects_bad_key_without_partial_client() {
	let key = SecretString::from("abcdef");
	let err = InjectiveClient::new(NetworkSelector::Testnet, Some(&key), None).unwrap_err();
	assert!(err.to_string().contains("Failed to derive client identity"));
}

#[tokio::test]
async fn test_bank_balance_query_decodes_payload() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock(
			"GET",
			"/cosmos/bank/v1beta1/balances/inj17w0adeg64ky0daxwd2ugyuneellmjgnxf5vkec/by_denom",
		)
		.match_query(Matcher::UrlEncoded("denom".into(), "inj".into()))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"balance": { "denom": "inj", "amount": "1000000000000000000" }
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = test_client_against(&server);
	let address = client.identity().derived_address.clone();
	let response = client.fetch_balance(&address, "inj").await.unwrap();

	assert_eq!(response.balance.denom, "inj");
	assert_eq!(response.balance.amount, "1000000000000000000");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_spot_markets_query_decodes_payload() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/api/exchange/spot/v1/markets")
		.with_status(200)
		.with_body(
			json!({
				"markets": [{
					"market_id": "0xa508cb32923323679f29a032c70342c147c17d0145625922b0ef22e955c844c0",
					"market_status": "active",
					"ticker": "INJ/USDT"
				}]
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = test_client_against(&server);
	let response = client.fetch_spot_markets().await.unwrap();
	assert_eq!(response.markets.len(), 1);
	assert_eq!(response.markets[0].ticker, "INJ/USDT");
}

#[tokio::test]
async fn test_concurrent_calls_do_not_cross_talk() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/cosmos/mint/v1beta1/inflation")
		.with_status(200)
		.with_body(json!({ "inflation": "0.050000000000000000" }).to_string())
		.create_async()
		.await;
	server
		.mock("GET", "/cosmos/bank/v1beta1/supply/by_denom")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(json!({ "amount": { "denom": "inj", "amount": "42" } }).to_string())
		.create_async()
		.await;
	server
		.mock("GET", "/injective/auction/v1beta1/params")
		.with_status(500)
		.with_body("backend exploded")
		.create_async()
		.await;

	let client = test_client_against(&server);

	// One failing call in the batch must not disturb the others.
	let (inflation, supply, auction) = tokio::join!(
		client.fetch_inflation(),
		client.fetch_supply_of("inj"),
		client.fetch_auction_module_params(),
	);

	assert_eq!(inflation.unwrap().inflation, "0.050000000000000000");
	assert_eq!(supply.unwrap().amount.amount, "42");
	let fault = auction.unwrap_err();
	assert_eq!(fault.operation, "query");
}

#[tokio::test]
async fn test_many_concurrent_calls_complete_independently() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", Matcher::Regex(r"^/cosmos/bank/v1beta1/balances/.*".into()))
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(json!({ "balance": { "denom": "inj", "amount": "7" } }).to_string())
		.expect_at_least(8)
		.create_async()
		.await;

	let client = test_client_against(&server);
	let address = client.identity().derived_address.clone();

	let calls = (0..8).map(|_| client.fetch_balance(&address, "inj"));
	let results = futures::future::join_all(calls).await;

	assert_eq!(results.len(), 8);
	for result in results {
		assert_eq!(result.unwrap().balance.amount, "7");
	}
}

#[tokio::test]
async fn test_chain_and_indexer_calls_hit_their_own_endpoints() {
	let mut chain_server = Server::new_async().await;
	let mut indexer_server = Server::new_async().await;

	let chain_mock = chain_server
		.mock("GET", "/cosmos/mint/v1beta1/inflation")
		.with_status(200)
		.with_body(json!({ "inflation": "0.05" }).to_string())
		.create_async()
		.await;
	let indexer_mock = indexer_server
		.mock("GET", "/api/exchange/spot/v1/markets")
		.with_status(200)
		.with_body(json!({ "markets": [] }).to_string())
		.create_async()
		.await;

	let endpoints = EndpointSet::from_urls(
		&chain_server.url(),
		&indexer_server.url(),
		&chain_server.url(),
	)
	.unwrap();
	let key = SecretString::from(TEST_KEY);
	let client =
		InjectiveClient::with_endpoints(NetworkSelector::LocalNet, endpoints, Some(&key), None)
			.unwrap();

	client.fetch_inflation().await.unwrap();
	client.fetch_spot_markets().await.unwrap();

	chain_mock.assert_async().await;
	indexer_mock.assert_async().await;
}
