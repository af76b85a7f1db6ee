//! IBC transfer chain module client.

use std::sync::Arc;

use crate::{
	models::{
		chain::{DenomTraceResponse, DenomTracesResponse},
		PageRequest,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct IbcClient {
	transport: Arc<dyn GatewayTransport>,
}

impl IbcClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_denom_trace(&self, hash: &str) -> Result<DenomTraceResponse, TransportError> {
		let path = format!("/ibc/apps/transfer/v1/denom_traces/{}", hash);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_denom_traces(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<DenomTracesResponse, TransportError> {
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self
			.transport
			.send_get("/ibc/apps/transfer/v1/denom_traces", &query)
			.await?;
		decode(payload)
	}
}
