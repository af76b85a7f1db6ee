//! Fault normalization through the dispatch chokepoint.

use mockito::{Matcher, Server};

use injective_client::{
	models::{EndpointSet, NetworkSelector, SecretString},
	services::client::{ErrorCode, InjectiveClient, NormalizedFault, TransportError},
};

const TEST_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

fn test_client_against(server: &Server) -> InjectiveClient {
	let url = server.url();
	let endpoints = EndpointSet::from_urls(&url, &url, &url).unwrap();
	let key = SecretString::from(TEST_KEY);
	InjectiveClient::with_endpoints(NetworkSelector::LocalNet, endpoints, Some(&key), None)
		.unwrap()
}

#[tokio::test]
async fn test_failing_query_raises_exactly_one_fault() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", Matcher::Regex(r"^/cosmos/bank/v1beta1/balances/.*".into()))
		.match_query(Matcher::Any)
		.with_status(503)
		.with_body("service unavailable")
		.create_async()
		.await;

	let client = test_client_against(&server);
	let fault = client
		.fetch_balance(&client.identity().derived_address, "inj")
		.await
		.unwrap_err();

	assert_eq!(fault.operation, "query");
	assert_eq!(fault.code, ErrorCode::Unspecified);

	// The fault wraps the transport failure directly; there is no second
	// layer of normalization anywhere in the chain.
	let source = fault.context.source.as_ref().unwrap();
	assert!(source.downcast_ref::<NormalizedFault>().is_none());
	match source.downcast_ref::<TransportError>().unwrap() {
		TransportError::Http { status_code, .. } => assert_eq!(*status_code, 503),
		other => panic!("expected an HTTP error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_failing_request_carries_request_tag() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/api/exchange/account/v1/order_states")
		.with_status(500)
		.with_body("boom")
		.create_async()
		.await;

	let client = test_client_against(&server);
	let fault = client
		.fetch_order_states(&["0xabc".to_string()], &[])
		.await
		.unwrap_err();

	assert_eq!(fault.operation, "request");
	let source = fault.context.source.as_ref().unwrap();
	assert!(source.downcast_ref::<TransportError>().is_some());
}

#[tokio::test]
async fn test_malformed_payload_surfaces_as_parse_fault() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/cosmos/mint/v1beta1/inflation")
		.with_status(200)
		.with_body("not json at all")
		.create_async()
		.await;

	let client = test_client_against(&server);
	let fault = client.fetch_inflation().await.unwrap_err();

	assert_eq!(fault.operation, "query");
	let source = fault.context.source.as_ref().unwrap();
	assert!(matches!(
		source.downcast_ref::<TransportError>().unwrap(),
		TransportError::ResponseParse(_)
	));
}

#[tokio::test]
async fn test_unreachable_endpoint_surfaces_as_network_fault() {
	let endpoints = EndpointSet::from_urls(
		"http://127.0.0.1:1",
		"http://127.0.0.1:1",
		"http://127.0.0.1:1",
	)
	.unwrap();
	let key = SecretString::from(TEST_KEY);
	let client =
		InjectiveClient::with_endpoints(NetworkSelector::LocalNet, endpoints, Some(&key), None)
			.unwrap();

	let fault = client.fetch_inflation().await.unwrap_err();
	assert_eq!(fault.operation, "query");
	assert!(fault.context.source.is_some());
}
