//! Explorer indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{
		BlockResponse, BlocksResponse, ExplorerStatsResponse, ExplorerTx,
		ExplorerValidatorResponse, IbcTransferTxsResponse, PeggyDepositTxsResponse,
		PeggyWithdrawalTxsResponse, TxsResponse, ValidatorUptimeResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct ExplorerClient {
	transport: Arc<dyn GatewayTransport>,
}

impl ExplorerClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_tx_by_hash(&self, hash: &str) -> Result<ExplorerTx, TransportError> {
		let path = format!("/api/explorer/v1/txs/{}", hash);
		let payload = self.transport.send_get(&path, &[]).await?;
		#[derive(serde::Deserialize)]
		struct Wrapper {
			#[serde(default)]
			data: ExplorerTx,
		}
		let wrapper: Wrapper = decode(payload)?;
		Ok(wrapper.data)
	}

	pub async fn fetch_account_txs(
		&self,
		address: &str,
		limit: Option<i32>,
	) -> Result<TxsResponse, TransportError> {
		let path = format!("/api/explorer/v1/accountTxs/{}", address);
		let mut query = Vec::new();
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_validator(
		&self,
		validator_address: &str,
	) -> Result<ExplorerValidatorResponse, TransportError> {
		let path = format!("/api/explorer/v1/validators/{}", validator_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_validator_uptime(
		&self,
		validator_address: &str,
	) -> Result<ValidatorUptimeResponse, TransportError> {
		let path = format!("/api/explorer/v1/validator_uptime/{}", validator_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_peggy_deposit_txs(
		&self,
		sender: Option<&str>,
		receiver: Option<&str>,
	) -> Result<PeggyDepositTxsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(sender) = sender {
			query.push(("sender".to_string(), sender.to_string()));
		}
		if let Some(receiver) = receiver {
			query.push(("receiver".to_string(), receiver.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/explorer/v1/peggy/deposit_txs", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_peggy_withdrawal_txs(
		&self,
		sender: Option<&str>,
		receiver: Option<&str>,
	) -> Result<PeggyWithdrawalTxsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(sender) = sender {
			query.push(("sender".to_string(), sender.to_string()));
		}
		if let Some(receiver) = receiver {
			query.push(("receiver".to_string(), receiver.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/explorer/v1/peggy/withdrawal_txs", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_blocks(&self, limit: Option<i32>) -> Result<BlocksResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/explorer/v1/blocks", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_block(&self, block_id: &str) -> Result<BlockResponse, TransportError> {
		let path = format!("/api/explorer/v1/blocks/{}", block_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_txs(
		&self,
		tx_type: Option<&str>,
		limit: Option<i32>,
	) -> Result<TxsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(tx_type) = tx_type {
			query.push(("type".to_string(), tx_type.to_string()));
		}
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/explorer/v1/txs", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_ibc_transfer_txs(
		&self,
		sender: Option<&str>,
		receiver: Option<&str>,
	) -> Result<IbcTransferTxsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(sender) = sender {
			query.push(("sender".to_string(), sender.to_string()));
		}
		if let Some(receiver) = receiver {
			query.push(("receiver".to_string(), receiver.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/explorer/v1/ibc/transfer_txs", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_stats(&self) -> Result<ExplorerStatsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/explorer/v1/stats", &[])
			.await?;
		decode(payload)
	}
}
