//! Auth chain module client.

use std::sync::Arc;

use crate::{
	models::{
		chain::{AccountsResponse, AuthModuleParamsResponse},
		PageRequest,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct AuthClient {
	transport: Arc<dyn GatewayTransport>,
}

impl AuthClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<AuthModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/auth/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_accounts(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<AccountsResponse, TransportError> {
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self
			.transport
			.send_get("/cosmos/auth/v1beta1/accounts", &query)
			.await?;
		decode(payload)
	}
}
