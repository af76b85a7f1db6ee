//! Mito vaults indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{
		MitoChartResponse, MitoClaimReferencesResponse, MitoHolderPortfolioResponse,
		MitoIdoActivitiesResponse, MitoIdoResponse, MitoIdoSubscribersResponse,
		MitoIdoSubscriptionResponse, MitoIdoWhitelistResponse, MitoIdosResponse,
		MitoLeaderboardEpochsResponse, MitoLeaderboardResponse, MitoLpHoldersResponse,
		MitoMissionLeaderboardResponse, MitoMissionsResponse, MitoStakingHistoryResponse,
		MitoStakingPoolsResponse, MitoStakingRewardsResponse, MitoTransfersResponse,
		MitoVaultResponse, MitoVaultsResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct MitoClient {
	transport: Arc<dyn GatewayTransport>,
}

impl MitoClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_vault(
		&self,
		contract_address: &str,
	) -> Result<MitoVaultResponse, TransportError> {
		let path = format!("/api/mito/v1/vaults/{}", contract_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_vaults(&self) -> Result<MitoVaultsResponse, TransportError> {
		let payload = self.transport.send_get("/api/mito/v1/vaults", &[]).await?;
		decode(payload)
	}

	pub async fn fetch_lp_token_price_chart(
		&self,
		vault_address: &str,
		from: Option<i64>,
		to: Option<i64>,
	) -> Result<MitoChartResponse, TransportError> {
		let mut query = vec![("vaultAddress".to_string(), vault_address.to_string())];
		if let Some(from) = from {
			query.push(("fromTime".to_string(), from.to_string()));
		}
		if let Some(to) = to {
			query.push(("toTime".to_string(), to.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/lp_token_price_chart", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_tvl_chart(
		&self,
		vault_address: &str,
		from: Option<i64>,
		to: Option<i64>,
	) -> Result<MitoChartResponse, TransportError> {
		let mut query = vec![("vaultAddress".to_string(), vault_address.to_string())];
		if let Some(from) = from {
			query.push(("fromTime".to_string(), from.to_string()));
		}
		if let Some(to) = to {
			query.push(("toTime".to_string(), to.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/tvl_chart", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_vaults_by_holder_address(
		&self,
		holder_address: &str,
	) -> Result<MitoLpHoldersResponse, TransportError> {
		let path = format!("/api/mito/v1/holders/{}/vaults", holder_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_lp_holders(
		&self,
		vault_address: &str,
	) -> Result<MitoLpHoldersResponse, TransportError> {
		let path = format!("/api/mito/v1/vaults/{}/holders", vault_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_holder_portfolio(
		&self,
		holder_address: &str,
	) -> Result<MitoHolderPortfolioResponse, TransportError> {
		let path = format!("/api/mito/v1/portfolio/{}", holder_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_leaderboard(
		&self,
		epoch_id: Option<i32>,
	) -> Result<MitoLeaderboardResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(epoch_id) = epoch_id {
			query.push(("epochId".to_string(), epoch_id.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/leaderboard", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_transfer_history(
		&self,
		vault: Option<&str>,
		account: Option<&str>,
	) -> Result<MitoTransfersResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(vault) = vault {
			query.push(("vault".to_string(), vault.to_string()));
		}
		if let Some(account) = account {
			query.push(("account".to_string(), account.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/transfers", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_leaderboard_epochs(
		&self,
		limit: Option<i32>,
	) -> Result<MitoLeaderboardEpochsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(limit) = limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/leaderboard/epochs", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_staking_pools(
		&self,
		staker: Option<&str>,
		staking_contract_address: Option<&str>,
	) -> Result<MitoStakingPoolsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(staker) = staker {
			query.push(("staker".to_string(), staker.to_string()));
		}
		if let Some(address) = staking_contract_address {
			query.push(("stakingContractAddress".to_string(), address.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/staking/pools", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_staking_history(
		&self,
		staker: Option<&str>,
	) -> Result<MitoStakingHistoryResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(staker) = staker {
			query.push(("staker".to_string(), staker.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/staking/history", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_staking_rewards_by_account(
		&self,
		staker: &str,
	) -> Result<MitoStakingRewardsResponse, TransportError> {
		let path = format!("/api/mito/v1/staking/rewards/{}", staker);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_missions(
		&self,
		account_address: &str,
	) -> Result<MitoMissionsResponse, TransportError> {
		let query = vec![("accountAddress".to_string(), account_address.to_string())];
		let payload = self
			.transport
			.send_get("/api/mito/v1/missions", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_mission_leaderboard(
		&self,
		user_address: Option<&str>,
	) -> Result<MitoMissionLeaderboardResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(user_address) = user_address {
			query.push(("userAddress".to_string(), user_address.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/mito/v1/missions/leaderboard", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_ido(
		&self,
		contract_address: &str,
		account_address: Option<&str>,
	) -> Result<MitoIdoResponse, TransportError> {
		let path = format!("/api/mito/v1/idos/{}", contract_address);
		let mut query = Vec::new();
		if let Some(account_address) = account_address {
			query.push(("accountAddress".to_string(), account_address.to_string()));
		}
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_idos(
		&self,
		status: Option<&str>,
	) -> Result<MitoIdosResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(status) = status {
			query.push(("status".to_string(), status.to_string()));
		}
		let payload = self.transport.send_get("/api/mito/v1/idos", &query).await?;
		decode(payload)
	}

	pub async fn fetch_ido_subscribers(
		&self,
		contract_address: &str,
	) -> Result<MitoIdoSubscribersResponse, TransportError> {
		let path = format!("/api/mito/v1/idos/{}/subscribers", contract_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_ido_subscription(
		&self,
		contract_address: &str,
		account_address: &str,
	) -> Result<MitoIdoSubscriptionResponse, TransportError> {
		let path = format!(
			"/api/mito/v1/idos/{}/subscription/{}",
			contract_address, account_address
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_ido_activities(
		&self,
		contract_address: &str,
	) -> Result<MitoIdoActivitiesResponse, TransportError> {
		let path = format!("/api/mito/v1/idos/{}/activities", contract_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_ido_whitelist(
		&self,
		ido_address: &str,
	) -> Result<MitoIdoWhitelistResponse, TransportError> {
		let path = format!("/api/mito/v1/idos/{}/whitelist", ido_address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_claim_references(
		&self,
		ido_address: &str,
		account_address: &str,
	) -> Result<MitoClaimReferencesResponse, TransportError> {
		let query = vec![
			("idoAddress".to_string(), ido_address.to_string()),
			("accountAddress".to_string(), account_address.to_string()),
		];
		let payload = self
			.transport
			.send_get("/api/mito/v1/claim_references", &query)
			.await?;
		decode(payload)
	}
}
