//! REST-bound clients for queries with no gateway binding on the gRPC host.
//!
//! Account detail and tendermint service queries go against the resolved
//! REST (LCD) endpoint.

use std::sync::Arc;

use crate::{
	models::chain::{AccountResponse, LatestBlockResponse, NodeInfoResponse, SyncingResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct AuthRestClient {
	transport: Arc<dyn GatewayTransport>,
}

impl AuthRestClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_account(&self, address: &str) -> Result<AccountResponse, TransportError> {
		let path = format!("/cosmos/auth/v1beta1/accounts/{}", address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}

pub struct TendermintRestClient {
	transport: Arc<dyn GatewayTransport>,
}

impl TendermintRestClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_latest_block(&self) -> Result<LatestBlockResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/base/tendermint/v1beta1/blocks/latest", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_node_info(&self) -> Result<NodeInfoResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/base/tendermint/v1beta1/node_info", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_syncing(&self) -> Result<SyncingResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/base/tendermint/v1beta1/syncing", &[])
			.await?;
		decode(payload)
	}
}
