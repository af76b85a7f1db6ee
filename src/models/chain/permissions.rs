//! Permissions module payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionsParams {
	#[serde(default)]
	pub wasm_hook_query_max_gas: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionsModuleParamsResponse {
	#[serde(default)]
	pub params: PermissionsParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolePermission {
	#[serde(default)]
	pub role: String,
	#[serde(default)]
	pub permissions: u32,
}

/// A tokenfactory denom namespace with its role assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub wasm_hook: String,
	#[serde(default)]
	pub mints_paused: bool,
	#[serde(default)]
	pub sends_paused: bool,
	#[serde(default)]
	pub burns_paused: bool,
	#[serde(default)]
	pub role_permissions: Vec<RolePermission>,
	#[serde(default)]
	pub address_roles: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllNamespacesResponse {
	#[serde(default)]
	pub namespaces: Vec<Namespace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceByDenomResponse {
	#[serde(default)]
	pub namespace: Option<Namespace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRolesResponse {
	#[serde(default)]
	pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressesByRoleResponse {
	#[serde(default)]
	pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VouchersForAddressResponse {
	#[serde(default)]
	pub vouchers: Vec<serde_json::Value>,
}
