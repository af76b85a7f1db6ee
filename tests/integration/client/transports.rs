//! HTTP transport behavior against a mock gateway.

use mockito::{Matcher, Server};
use serde_json::json;
use url::Url;

use injective_client::services::client::{GatewayTransport, HttpTransportClient, TransportError};

fn transport_for(server: &Server) -> HttpTransportClient {
	HttpTransportClient::new(Url::parse(&server.url()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_send_get_forwards_query_parameters() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/cosmos/bank/v1beta1/supply")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("pagination.limit".into(), "10".into()),
			Matcher::UrlEncoded("pagination.key".into(), "abc".into()),
		]))
		.with_status(200)
		.with_body(json!({ "supply": [] }).to_string())
		.create_async()
		.await;

	let transport = transport_for(&server);
	let payload = transport
		.send_get(
			"/cosmos/bank/v1beta1/supply",
			&[
				("pagination.limit".to_string(), "10".to_string()),
				("pagination.key".to_string(), "abc".to_string()),
			],
		)
		.await
		.unwrap();

	assert_eq!(payload, json!({ "supply": [] }));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_send_post_forwards_json_body() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/api/exchange/account/v1/order_states")
		.match_body(Matcher::Json(json!({ "spotOrderHashes": ["0xabc"] })))
		.with_status(200)
		.with_body(json!({ "spot_order_states": [] }).to_string())
		.create_async()
		.await;

	let transport = transport_for(&server);
	let payload = transport
		.send_post(
			"/api/exchange/account/v1/order_states",
			&json!({ "spotOrderHashes": ["0xabc"] }),
		)
		.await
		.unwrap();

	assert_eq!(payload, json!({ "spot_order_states": [] }));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_surfaces_status_and_body() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/cosmos/mint/v1beta1/inflation")
		.with_status(404)
		.with_body("unknown path")
		.create_async()
		.await;

	let transport = transport_for(&server);
	let err = transport
		.send_get("/cosmos/mint/v1beta1/inflation", &[])
		.await
		.unwrap_err();

	match err {
		TransportError::Http {
			status_code, body, ..
		} => {
			assert_eq!(status_code, 404);
			assert_eq!(body, "unknown path");
		}
		other => panic!("expected an HTTP error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_non_json_success_body_is_a_parse_error() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/cosmos/mint/v1beta1/inflation")
		.with_status(200)
		.with_body("<html>proxy page</html>")
		.create_async()
		.await;

	let transport = transport_for(&server);
	let err = transport
		.send_get("/cosmos/mint/v1beta1/inflation", &[])
		.await
		.unwrap_err();
	assert!(matches!(err, TransportError::ResponseParse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
	let transport = HttpTransportClient::new(Url::parse("http://127.0.0.1:1").unwrap()).unwrap();
	let err = transport.send_get("/anything", &[]).await.unwrap_err();
	assert!(matches!(err, TransportError::Network(_)));
}
