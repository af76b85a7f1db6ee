//! Account portfolio indexer payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCoin {
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub amount: String,
	#[serde(default)]
	pub usd_price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSubaccountDeposit {
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub total_balance: String,
	#[serde(default)]
	pub available_balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPortfolio {
	#[serde(default)]
	pub account_address: String,
	#[serde(default)]
	pub bank_balances: Vec<PortfolioCoin>,
	#[serde(default)]
	pub subaccounts: Vec<PortfolioSubaccountDeposit>,
	#[serde(default)]
	pub positions_with_upnl: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPortfolioResponse {
	#[serde(default)]
	pub portfolio: AccountPortfolio,
}

/// Balances-only variant of the portfolio query (skips open positions).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPortfolioBalancesResponse {
	#[serde(default)]
	pub portfolio: AccountPortfolio,
}
