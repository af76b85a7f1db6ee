//! Token factory chain module client.

use std::sync::Arc;

use crate::{
	models::chain::{
		DenomAuthorityMetadataResponse, DenomsFromCreatorResponse, TokenFactoryModuleParamsResponse,
		TokenFactoryModuleStateResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct TokenFactoryClient {
	transport: Arc<dyn GatewayTransport>,
}

impl TokenFactoryClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(
		&self,
	) -> Result<TokenFactoryModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/tokenfactory/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_module_state(
		&self,
	) -> Result<TokenFactoryModuleStateResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/tokenfactory/v1beta1/module_state", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_denoms_from_creator(
		&self,
		creator: &str,
	) -> Result<DenomsFromCreatorResponse, TransportError> {
		let path = format!(
			"/injective/tokenfactory/v1beta1/denoms_from_creator/{}",
			creator
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_denom_authority_metadata(
		&self,
		creator: &str,
		sub_denom: &str,
	) -> Result<DenomAuthorityMetadataResponse, TransportError> {
		let path = format!(
			"/injective/tokenfactory/v1beta1/denoms/factory/{}/{}/authority_metadata",
			creator, sub_denom
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
