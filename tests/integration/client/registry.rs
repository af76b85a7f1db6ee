//! Module client registry wiring over injected transports.

use std::sync::Arc;

use serde_json::json;

use injective_client::services::client::ModuleClientRegistry;

use crate::integration::mocks::MockGatewayTransportClient;

fn transport_serving(path: &'static str, payload: serde_json::Value) -> Arc<MockGatewayTransportClient> {
	let mut mock = MockGatewayTransportClient::new();
	mock.expect_send_get()
		.withf(move |p, _| p == path)
		.returning(move |_, _| Ok(payload.clone()));
	Arc::new(mock)
}

fn unused_transport() -> Arc<MockGatewayTransportClient> {
	// No expectations; any call panics and fails the test.
	Arc::new(MockGatewayTransportClient::new())
}

#[tokio::test]
async fn test_chain_module_uses_chain_transport() {
	let chain = transport_serving(
		"/cosmos/mint/v1beta1/inflation",
		json!({ "inflation": "0.05" }),
	);
	let registry =
		ModuleClientRegistry::with_transports(chain, unused_transport(), unused_transport());

	let response = registry.mint.fetch_inflation().await.unwrap();
	assert_eq!(response.inflation, "0.05");
}

#[tokio::test]
async fn test_indexer_module_uses_indexer_transport() {
	let indexer = transport_serving("/api/exchange/spot/v1/markets", json!({ "markets": [] }));
	let registry =
		ModuleClientRegistry::with_transports(unused_transport(), indexer, unused_transport());

	let response = registry.indexer_spot.fetch_markets().await.unwrap();
	assert!(response.markets.is_empty());
}

#[tokio::test]
async fn test_tendermint_module_uses_rest_transport() {
	let rest = transport_serving(
		"/cosmos/base/tendermint/v1beta1/blocks/latest",
		json!({ "block": { "header": { "height": "12345", "chain_id": "injective-1" } } }),
	);
	let registry =
		ModuleClientRegistry::with_transports(unused_transport(), unused_transport(), rest);

	let response = registry.rest_tendermint.fetch_latest_block().await.unwrap();
	assert_eq!(response.block.header.height, "12345");
	assert_eq!(response.block.header.chain_id, "injective-1");
}

#[tokio::test]
async fn test_pagination_is_forwarded_as_query_parameters() {
	use injective_client::models::PageRequest;

	let mut mock = MockGatewayTransportClient::new();
	mock.expect_send_get()
		.withf(|path, query| {
			path == "/cosmos/bank/v1beta1/supply"
				&& query.contains(&("pagination.limit".to_string(), "50".to_string()))
		})
		.returning(|_, _| Ok(json!({ "supply": [] })));
	let registry = ModuleClientRegistry::with_transports(
		Arc::new(mock),
		unused_transport(),
		unused_transport(),
	);

	let pagination = PageRequest {
		limit: Some(50),
		..Default::default()
	};
	registry
		.bank
		.fetch_total_supply(Some(&pagination))
		.await
		.unwrap();
}
