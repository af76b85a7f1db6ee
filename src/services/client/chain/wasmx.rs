//! WasmX chain module client.

use std::sync::Arc;

use crate::{
	models::chain::{WasmxModuleParamsResponse, WasmxModuleStateResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct WasmxClient {
	transport: Arc<dyn GatewayTransport>,
}

impl WasmxClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<WasmxModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/wasmx/v1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_module_state(&self) -> Result<WasmxModuleStateResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/wasmx/v1/module_state", &[])
			.await?;
		decode(payload)
	}
}
