//! CosmWasm chain module client.
//!
//! Smart and raw state queries carry their query data base64-encoded in the
//! gateway path, per the wasmd gateway mapping.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::Value;

use crate::{
	models::{
		chain::{
			ContractCodeResponse, ContractCodesResponse, ContractHistoryResponse,
			ContractInfoResponse, ContractStateResponse, ContractsByCodeResponse,
			RawContractStateResponse, SmartContractStateResponse,
		},
		PageRequest,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct WasmClient {
	transport: Arc<dyn GatewayTransport>,
}

impl WasmClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_contract_info(
		&self,
		contract_address: &str,
	) -> Result<ContractInfoResponse, TransportError> {
		let path = format!("/cosmwasm/wasm/v1/contract/{}", contract_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_contract_history(
		&self,
		contract_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<ContractHistoryResponse, TransportError> {
		let path = format!("/cosmwasm/wasm/v1/contract/{}/history", contract_address);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_smart_contract_state(
		&self,
		contract_address: &str,
		query: &Value,
	) -> Result<SmartContractStateResponse, TransportError> {
		let query_data = serde_json::to_vec(query).map_err(|e| {
			TransportError::request_serialization(
				"Failed to serialize smart query data",
				Some(e.into()),
				None,
			)
		})?;
		let path = format!(
			"/cosmwasm/wasm/v1/contract/{}/smart/{}",
			contract_address,
			STANDARD.encode(query_data)
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_raw_contract_state(
		&self,
		contract_address: &str,
		query_data: &[u8],
	) -> Result<RawContractStateResponse, TransportError> {
		let path = format!(
			"/cosmwasm/wasm/v1/contract/{}/raw/{}",
			contract_address,
			STANDARD.encode(query_data)
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_contract_codes(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<ContractCodesResponse, TransportError> {
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self
			.transport
			.send_get("/cosmwasm/wasm/v1/code", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_contract_code(
		&self,
		code_id: u64,
	) -> Result<ContractCodeResponse, TransportError> {
		let path = format!("/cosmwasm/wasm/v1/code/{}", code_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_contracts_by_code(
		&self,
		code_id: u64,
		pagination: Option<&PageRequest>,
	) -> Result<ContractsByCodeResponse, TransportError> {
		let path = format!("/cosmwasm/wasm/v1/code/{}/contracts", code_id);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	/// Bank balances held by a contract's own account.
	pub async fn fetch_contract_accounts_balance(
		&self,
		contract_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<crate::models::chain::BalancesResponse, TransportError> {
		let path = format!("/cosmos/bank/v1beta1/balances/{}", contract_address);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	/// Full key/value state of a contract, paged.
	pub async fn fetch_contract_state(
		&self,
		contract_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<ContractStateResponse, TransportError> {
		let path = format!("/cosmwasm/wasm/v1/contract/{}/state", contract_address);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}
}
