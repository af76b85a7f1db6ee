//! Indexer account (subaccount) client.

use std::sync::Arc;

use crate::{
	models::indexer::{
		OrderStatesResponse, RewardsResponse, SubaccountBalancesResponse,
		SubaccountHistoryResponse, SubaccountOrderSummaryResponse, SubaccountsResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct IndexerAccountClient {
	transport: Arc<dyn GatewayTransport>,
}

impl IndexerAccountClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_rewards(
		&self,
		address: &str,
		epoch: Option<i64>,
	) -> Result<RewardsResponse, TransportError> {
		let mut query = vec![("accountAddress".to_string(), address.to_string())];
		if let Some(epoch) = epoch {
			query.push(("epoch".to_string(), epoch.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/exchange/account/v1/rewards", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_subaccounts(
		&self,
		address: &str,
	) -> Result<SubaccountsResponse, TransportError> {
		let path = format!("/api/exchange/account/v1/subaccounts/{}", address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_subaccount_balances(
		&self,
		subaccount_id: &str,
	) -> Result<SubaccountBalancesResponse, TransportError> {
		let path = format!(
			"/api/exchange/account/v1/subaccount/{}/balances",
			subaccount_id
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_subaccount_history(
		&self,
		subaccount_id: &str,
		denom: Option<&str>,
	) -> Result<SubaccountHistoryResponse, TransportError> {
		let path = format!(
			"/api/exchange/account/v1/subaccount/{}/history",
			subaccount_id
		);
		let mut query = Vec::new();
		if let Some(denom) = denom {
			query.push(("denom".to_string(), denom.to_string()));
		}
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_subaccount_order_summary(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<SubaccountOrderSummaryResponse, TransportError> {
		let path = format!(
			"/api/exchange/account/v1/subaccount/{}/order_summary",
			subaccount_id
		);
		let mut query = Vec::new();
		if let Some(market_id) = market_id {
			query.push(("marketId".to_string(), market_id.to_string()));
		}
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	// The order-states endpoint takes the hash lists in a JSON body.
	pub async fn fetch_order_states(
		&self,
		spot_order_hashes: &[String],
		derivative_order_hashes: &[String],
	) -> Result<OrderStatesResponse, TransportError> {
		let body = serde_json::json!({
			"spotOrderHashes": spot_order_hashes,
			"derivativeOrderHashes": derivative_order_hashes,
		});
		let payload = self
			.transport
			.send_post("/api/exchange/account/v1/order_states", &body)
			.await?;
		decode(payload)
	}
}
