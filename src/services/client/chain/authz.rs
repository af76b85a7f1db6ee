//! Authz chain module client.

use std::sync::Arc;

use crate::{
	models::chain::GrantsResponse,
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct AuthzClient {
	transport: Arc<dyn GatewayTransport>,
}

impl AuthzClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_grants(
		&self,
		granter: &str,
		grantee: &str,
		msg_type_url: Option<&str>,
	) -> Result<GrantsResponse, TransportError> {
		let mut query = vec![
			("granter".to_string(), granter.to_string()),
			("grantee".to_string(), grantee.to_string()),
		];
		if let Some(msg_type_url) = msg_type_url {
			query.push(("msg_type_url".to_string(), msg_type_url.to_string()));
		}

		let payload = self
			.transport
			.send_get("/cosmos/authz/v1beta1/grants", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_granter_grants(
		&self,
		granter: &str,
	) -> Result<GrantsResponse, TransportError> {
		let path = format!("/cosmos/authz/v1beta1/grants/granter/{}", granter);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_grantee_grants(
		&self,
		grantee: &str,
	) -> Result<GrantsResponse, TransportError> {
		let path = format!("/cosmos/authz/v1beta1/grants/grantee/{}", grantee);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
