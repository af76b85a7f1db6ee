//! Liveness probe behavior.

use mockito::Server;
use serde_json::json;

use injective_client::{
	models::{EndpointSet, NetworkSelector, SecretString},
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

#[tokio::test]
async fn test_is_alive_true_when_backend_responds() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/cosmos/auth/v1beta1/params")
		.with_status(200)
		.with_body(json!({ "params": { "max_memo_characters": "256" } }).to_string())
		.expect_at_least(1)
		.create_async()
		.await;

	let client = test_client_against(&server);
	assert!(client.is_alive().await);
}

#[tokio::test]
async fn test_is_alive_false_when_backend_fails() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/cosmos/auth/v1beta1/params")
		.with_status(500)
		.with_body("down")
		.expect_at_least(1)
		.create_async()
		.await;

	let client = test_client_against(&server);
	assert!(!client.is_alive().await);
}

#[tokio::test]
async fn test_is_alive_is_idempotent() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/cosmos/auth/v1beta1/params")
		.with_status(200)
		.with_body(json!({ "params": {} }).to_string())
		.expect_at_least(3)
		.create_async()
		.await;

	let client = test_client_against(&server);
	for _ in 0..3 {
		assert!(client.is_alive().await);
	}
}

#[tokio::test]
async fn test_is_alive_false_against_unreachable_endpoint() {
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

	assert!(!client.is_alive().await);
}
