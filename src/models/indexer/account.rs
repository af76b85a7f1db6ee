//! Indexer account (subaccount) payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::Paging;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountsResponse {
	#[serde(default)]
	pub subaccounts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountDeposit {
	#[serde(default)]
	pub total_balance: String,
	#[serde(default)]
	pub available_balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountBalance {
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub account_address: String,
	#[serde(default)]
	pub denom: String,
	#[serde(default)]
	pub deposit: Option<SubaccountDeposit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountBalancesResponse {
	#[serde(default)]
	pub balances: Vec<SubaccountBalance>,
}

/// One deposit/withdrawal/transfer touching a subaccount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountBalanceTransfer {
	#[serde(default)]
	pub transfer_type: String,
	#[serde(default)]
	pub src_subaccount_id: String,
	#[serde(default)]
	pub src_account_address: String,
	#[serde(default)]
	pub dst_subaccount_id: String,
	#[serde(default)]
	pub dst_account_address: String,
	#[serde(default)]
	pub amount: Option<crate::models::core::Coin>,
	#[serde(default)]
	pub executed_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountHistoryResponse {
	#[serde(default)]
	pub transfers: Vec<SubaccountBalanceTransfer>,
	#[serde(default)]
	pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountOrderSummaryResponse {
	#[serde(default)]
	pub spot_orders_total: String,
	#[serde(default)]
	pub derivative_orders_total: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderState {
	#[serde(default)]
	pub order_hash: String,
	#[serde(default)]
	pub subaccount_id: String,
	#[serde(default)]
	pub market_id: String,
	#[serde(default)]
	pub order_type: String,
	#[serde(default)]
	pub order_side: String,
	#[serde(default)]
	pub state: String,
	#[serde(default)]
	pub quantity_filled: String,
	#[serde(default)]
	pub quantity_remaining: String,
	#[serde(default)]
	pub created_at: i64,
	#[serde(default)]
	pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatesResponse {
	#[serde(default)]
	pub spot_order_states: Vec<OrderState>,
	#[serde(default)]
	pub derivative_order_states: Vec<OrderState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingReward {
	#[serde(default)]
	pub account_address: String,
	#[serde(default)]
	pub rewards: Vec<crate::models::core::Coin>,
	#[serde(default)]
	pub distributed_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardsResponse {
	#[serde(default)]
	pub rewards: Vec<TradingReward>,
}
