//! Mito vaults indexer payloads.
//!
//! The vault/IDO schemas are wide and evolve with the Mito frontend;
//! deeply nested substructures stay as `serde_json::Value`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoVault {
	#[serde(default)]
	pub contract_address: String,
	#[serde(default)]
	pub code_id: String,
	#[serde(default)]
	pub vault_name: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub current_tvl: f64,
	#[serde(default)]
	pub profits: Option<serde_json::Value>,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub vault_type: String,
	#[serde(default)]
	pub lp_token_price: f64,
	#[serde(default)]
	pub subaccount_info: Option<serde_json::Value>,
	#[serde(default)]
	pub master_contract_address: String,
	#[serde(default)]
	pub total_lp_amount: String,
	#[serde(default)]
	pub notional_value_cap: String,
	#[serde(default)]
	pub tvl_changes: Option<serde_json::Value>,
	#[serde(default)]
	pub apy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoVaultResponse {
	#[serde(default)]
	pub vault: MitoVault,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoVaultsResponse {
	#[serde(default)]
	pub vaults: Vec<MitoVault>,
}

/// Sampled chart point, used for both LP price and TVL charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoChartPoint {
	#[serde(default)]
	pub price: f64,
	#[serde(default)]
	pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoChartResponse {
	#[serde(default)]
	pub prices: Vec<MitoChartPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoPortfolio {
	#[serde(default)]
	pub total_value: f64,
	#[serde(default)]
	pub pnl: f64,
	#[serde(default)]
	pub total_value_chart: Vec<MitoChartPoint>,
	#[serde(default)]
	pub pnl_chart: Vec<MitoChartPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoHolderPortfolioResponse {
	#[serde(default)]
	pub portfolio: MitoPortfolio,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoLpHolder {
	#[serde(default)]
	pub holder_address: String,
	#[serde(default)]
	pub vault_address: String,
	#[serde(default)]
	pub amount: String,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub lp_amount_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoLpHoldersResponse {
	#[serde(default)]
	pub holders: Vec<MitoLpHolder>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoLeaderboardEntry {
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub pnl: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoLeaderboardResponse {
	#[serde(default)]
	pub entries: Vec<MitoLeaderboardEntry>,
	#[serde(default)]
	pub snapshot_block: String,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub epoch_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoLeaderboardEpoch {
	#[serde(default)]
	pub epoch_id: i32,
	#[serde(default)]
	pub start_at: i64,
	#[serde(default)]
	pub end_at: i64,
	#[serde(default)]
	pub is_live: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoLeaderboardEpochsResponse {
	#[serde(default)]
	pub epochs: Vec<MitoLeaderboardEpoch>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoTransfer {
	#[serde(default)]
	pub lp_amount: String,
	#[serde(default)]
	pub coins: Vec<crate::models::core::Coin>,
	#[serde(default)]
	pub usd_value: String,
	#[serde(default)]
	pub is_deposit: bool,
	#[serde(default)]
	pub executed_at: i64,
	#[serde(default)]
	pub account: String,
	#[serde(default)]
	pub vault: String,
	#[serde(default)]
	pub tx_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoTransfersResponse {
	#[serde(default)]
	pub transfers: Vec<MitoTransfer>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoStakingPool {
	#[serde(default)]
	pub vault_name: String,
	#[serde(default)]
	pub vault_address: String,
	#[serde(default)]
	pub stake_denom: String,
	#[serde(default)]
	pub gauges: Vec<serde_json::Value>,
	#[serde(default)]
	pub apr: f64,
	#[serde(default)]
	pub total_liquidity: f64,
	#[serde(default)]
	pub staking_address: String,
	#[serde(default)]
	pub aprs: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoStakingPoolsResponse {
	#[serde(default)]
	pub pools: Vec<MitoStakingPool>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoStakingActivity {
	#[serde(default)]
	pub action: String,
	#[serde(default)]
	pub tx_hash: String,
	#[serde(default)]
	pub staker: String,
	#[serde(default)]
	pub vault_address: String,
	#[serde(default)]
	pub numeric_value: f64,
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub stake_amount: String,
	#[serde(default)]
	pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoStakingHistoryResponse {
	#[serde(default)]
	pub activities: Vec<MitoStakingActivity>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoStakingReward {
	#[serde(default)]
	pub apr: f64,
	#[serde(default)]
	pub vault_name: String,
	#[serde(default)]
	pub vault_address: String,
	#[serde(default)]
	pub lock_timestamp: i64,
	#[serde(default)]
	pub claimable_rewards: Vec<crate::models::core::Coin>,
	#[serde(default)]
	pub stake_amount: Option<crate::models::core::Coin>,
	#[serde(default)]
	pub locked_amount: Option<crate::models::core::Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoStakingRewardsResponse {
	#[serde(default)]
	pub rewards: Vec<MitoStakingReward>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoMission {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub points: String,
	#[serde(default)]
	pub completed: bool,
	#[serde(default)]
	pub accrued_points: String,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub progress: f64,
	#[serde(default)]
	pub expected_completion_date: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoMissionsResponse {
	#[serde(default)]
	pub missions: Vec<MitoMission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoMissionLeaderboardEntry {
	#[serde(default)]
	pub user_address: String,
	#[serde(default)]
	pub accrued_points: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoMissionLeaderboardResponse {
	#[serde(default)]
	pub entries: Vec<MitoMissionLeaderboardEntry>,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub rank: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdo {
	#[serde(default)]
	pub start_time: i64,
	#[serde(default)]
	pub end_time: i64,
	#[serde(default)]
	pub owner: String,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub token_info: Option<serde_json::Value>,
	#[serde(default)]
	pub capped: bool,
	#[serde(default)]
	pub contract_address: String,
	#[serde(default)]
	pub subscribed_amount: String,
	#[serde(default)]
	pub project_token_amount: String,
	#[serde(default)]
	pub target_amount_in_quote_denom: String,
	#[serde(default)]
	pub secondary_market_id: String,
	#[serde(default)]
	pub use_whitelist: bool,
	#[serde(default)]
	pub marketing_info: Option<serde_json::Value>,
	#[serde(default)]
	pub token_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdoResponse {
	#[serde(default)]
	pub ido: Option<MitoIdo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdosResponse {
	#[serde(default)]
	pub idos: Vec<MitoIdo>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdoSubscriber {
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub subscribed_coin: Option<crate::models::core::Coin>,
	#[serde(default)]
	pub claimed_coin: Option<crate::models::core::Coin>,
	#[serde(default)]
	pub subscribed_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdoSubscribersResponse {
	#[serde(default)]
	pub subscribers: Vec<MitoIdoSubscriber>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
	#[serde(default)]
	pub token_info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdoSubscriptionResponse {
	#[serde(default)]
	pub subscription: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdoActivity {
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub subscribed_coin: Option<crate::models::core::Coin>,
	#[serde(default)]
	pub usd_value: f64,
	#[serde(default)]
	pub timestamp: i64,
	#[serde(default)]
	pub tx_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdoActivitiesResponse {
	#[serde(default)]
	pub activities: Vec<MitoIdoActivity>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoIdoWhitelistResponse {
	#[serde(default)]
	pub accounts: Vec<String>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoClaimReference {
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub updated_at: i64,
	#[serde(default)]
	pub claimed_amount: String,
	#[serde(default)]
	pub claimable_amount: String,
	#[serde(default)]
	pub account_address: String,
	#[serde(default)]
	pub cw_contract_address: String,
	#[serde(default)]
	pub ido_contract_address: String,
	#[serde(default)]
	pub start_vesting_time: i64,
	#[serde(default)]
	pub vesting_duration_seconds: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitoClaimReferencesResponse {
	#[serde(default)]
	pub claim_references: Vec<MitoClaimReference>,
	#[serde(default)]
	pub pagination: Option<serde_json::Value>,
}
