//! Archiver indexer client for historical series and leaderboards.

use std::sync::Arc;

use crate::{
	models::indexer::{
		DenomHoldersResponse, HistoricalBalanceResponse, HistoricalRpnlResponse,
		HistoricalVolumesResponse, PnlLeaderboardResponse, VolLeaderboardResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct ArchiverClient {
	transport: Arc<dyn GatewayTransport>,
}

impl ArchiverClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_historical_balance(
		&self,
		account: &str,
		resolution: &str,
	) -> Result<HistoricalBalanceResponse, TransportError> {
		let query = vec![
			("account".to_string(), account.to_string()),
			("resolution".to_string(), resolution.to_string()),
		];
		let payload = self
			.transport
			.send_get("/api/archiver/v1/balance", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_historical_rpnl(
		&self,
		account: &str,
		resolution: &str,
	) -> Result<HistoricalRpnlResponse, TransportError> {
		let query = vec![
			("account".to_string(), account.to_string()),
			("resolution".to_string(), resolution.to_string()),
		];
		let payload = self
			.transport
			.send_get("/api/archiver/v1/rpnl", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_historical_volumes(
		&self,
		account: &str,
		resolution: &str,
	) -> Result<HistoricalVolumesResponse, TransportError> {
		let query = vec![
			("account".to_string(), account.to_string()),
			("resolution".to_string(), resolution.to_string()),
		];
		let payload = self
			.transport
			.send_get("/api/archiver/v1/volumes", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_pnl_leaderboard(
		&self,
		start_date: &str,
		end_date: &str,
		limit: Option<i32>,
	) -> Result<PnlLeaderboardResponse, TransportError> {
		let mut query = vec![
			("startDate".to_string(), start_date.to_string()),
			("endDate".to_string(), end_date.to_string()),
		];
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/archiver/v1/leaderboard/pnl", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_vol_leaderboard(
		&self,
		start_date: &str,
		end_date: &str,
		limit: Option<i32>,
	) -> Result<VolLeaderboardResponse, TransportError> {
		let mut query = vec![
			("startDate".to_string(), start_date.to_string()),
			("endDate".to_string(), end_date.to_string()),
		];
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/archiver/v1/leaderboard/volume", &query)
			.await?;
		decode(payload)
	}

	/// Leaderboard over a fixed named window ("1d", "7d", "30d") rather than
	/// an explicit date range.
	pub async fn fetch_pnl_leaderboard_fixed_resolution(
		&self,
		resolution: &str,
		limit: Option<i32>,
	) -> Result<PnlLeaderboardResponse, TransportError> {
		let mut query = vec![("resolution".to_string(), resolution.to_string())];
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/archiver/v1/leaderboard/pnl/resolution", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_vol_leaderboard_fixed_resolution(
		&self,
		resolution: &str,
		limit: Option<i32>,
	) -> Result<VolLeaderboardResponse, TransportError> {
		let mut query = vec![("resolution".to_string(), resolution.to_string())];
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/archiver/v1/leaderboard/volume/resolution", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_denom_holders(
		&self,
		denom: &str,
		limit: Option<i32>,
	) -> Result<DenomHoldersResponse, TransportError> {
		let mut query = vec![("denom".to_string(), denom.to_string())];
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/archiver/v1/denom_holders", &query)
			.await?;
		decode(payload)
	}
}
