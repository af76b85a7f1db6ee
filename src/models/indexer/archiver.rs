//! Archiver (historical series and leaderboards) indexer payloads.

use serde::{Deserialize, Serialize};

/// Aligned time/value series. `t` holds unix timestamps, `v` the samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
	#[serde(default)]
	pub t: Vec<i64>,
	#[serde(default)]
	pub v: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBalanceResponse {
	#[serde(default)]
	pub historical_balance: HistoricalSeries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRpnlResponse {
	#[serde(default)]
	pub historical_rpnl: HistoricalSeries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalVolumesResponse {
	#[serde(default)]
	pub historical_volumes: HistoricalSeries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
	#[serde(default)]
	pub account: String,
	#[serde(default)]
	pub pnl: f64,
	#[serde(default)]
	pub volume: f64,
	#[serde(default)]
	pub rank: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PnlLeaderboardResponse {
	#[serde(default)]
	pub first_date: String,
	#[serde(default)]
	pub last_date: String,
	#[serde(default)]
	pub leaders: Vec<LeaderboardRow>,
	#[serde(default)]
	pub account_row: Option<LeaderboardRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolLeaderboardResponse {
	#[serde(default)]
	pub first_date: String,
	#[serde(default)]
	pub last_date: String,
	#[serde(default)]
	pub leaders: Vec<LeaderboardRow>,
	#[serde(default)]
	pub account_row: Option<LeaderboardRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomHolder {
	#[serde(default)]
	pub account_address: String,
	#[serde(default)]
	pub balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenomHoldersResponse {
	#[serde(default)]
	pub holders: Vec<DenomHolder>,
	#[serde(default)]
	pub next: Vec<String>,
}
