//! Permissions chain module client.

use std::sync::Arc;

use crate::{
	models::chain::{
		AddressRolesResponse, AddressesByRoleResponse, AllNamespacesResponse,
		NamespaceByDenomResponse, PermissionsModuleParamsResponse, VouchersForAddressResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct PermissionsClient {
	transport: Arc<dyn GatewayTransport>,
}

impl PermissionsClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(
		&self,
	) -> Result<PermissionsModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/permissions/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_all_namespaces(&self) -> Result<AllNamespacesResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/permissions/v1beta1/all_namespaces", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_namespace_by_denom(
		&self,
		denom: &str,
		include_roles: bool,
	) -> Result<NamespaceByDenomResponse, TransportError> {
		let query = vec![
			("denom".to_string(), denom.to_string()),
			("include_roles".to_string(), include_roles.to_string()),
		];
		let payload = self
			.transport
			.send_get("/injective/permissions/v1beta1/namespace_by_denom", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_address_roles(
		&self,
		denom: &str,
		address: &str,
	) -> Result<AddressRolesResponse, TransportError> {
		let path = format!(
			"/injective/permissions/v1beta1/address_roles/{}/{}",
			denom, address
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_addresses_by_role(
		&self,
		denom: &str,
		role: &str,
	) -> Result<AddressesByRoleResponse, TransportError> {
		let path = format!(
			"/injective/permissions/v1beta1/roles/{}/{}/addresses",
			denom, role
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_vouchers_for_address(
		&self,
		address: &str,
	) -> Result<VouchersForAddressResponse, TransportError> {
		let path = format!("/injective/permissions/v1beta1/vouchers/{}", address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
