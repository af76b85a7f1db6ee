//! Spot exchange indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{
		AtomicSwapHistoryResponse, OrderbookResponse, OrderbooksResponse, SpotMarketResponse,
		SpotMarketsResponse, SpotOrderHistoryResponse, SpotOrdersResponse, SpotTradesResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

/// Common filters for the subaccount-scoped spot queries.
#[derive(Debug, Clone, Default)]
pub struct SpotOrderFilter {
	pub market_id: Option<String>,
	pub subaccount_id: Option<String>,
	pub order_side: Option<String>,
}

impl SpotOrderFilter {
	fn to_query(&self) -> Vec<(String, String)> {
		let mut query = Vec::new();
		if let Some(market_id) = &self.market_id {
			query.push(("marketId".to_string(), market_id.clone()));
		}
		if let Some(subaccount_id) = &self.subaccount_id {
			query.push(("subaccountId".to_string(), subaccount_id.clone()));
		}
		if let Some(order_side) = &self.order_side {
			query.push(("orderSide".to_string(), order_side.clone()));
		}
		query
	}
}

pub struct SpotClient {
	transport: Arc<dyn GatewayTransport>,
}

impl SpotClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_markets(&self) -> Result<SpotMarketsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/spot/v1/markets", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_market(&self, market_id: &str) -> Result<SpotMarketResponse, TransportError> {
		let path = format!("/api/exchange/spot/v1/markets/{}", market_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_orders(
		&self,
		filter: &SpotOrderFilter,
	) -> Result<SpotOrdersResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/spot/v1/orders", &filter.to_query())
			.await?;
		decode(payload)
	}

	pub async fn fetch_order_history(
		&self,
		filter: &SpotOrderFilter,
	) -> Result<SpotOrderHistoryResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/spot/v1/orders/history", &filter.to_query())
			.await?;
		decode(payload)
	}

	pub async fn fetch_trades(
		&self,
		filter: &SpotOrderFilter,
	) -> Result<SpotTradesResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/spot/v1/trades", &filter.to_query())
			.await?;
		decode(payload)
	}

	pub async fn fetch_subaccount_orders(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<SpotOrdersResponse, TransportError> {
		let path = format!(
			"/api/exchange/spot/v1/subaccount/{}/orders",
			subaccount_id
		);
		let mut query = Vec::new();
		if let Some(market_id) = market_id {
			query.push(("marketId".to_string(), market_id.to_string()));
		}
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_subaccount_trades(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<SpotTradesResponse, TransportError> {
		let path = format!(
			"/api/exchange/spot/v1/subaccount/{}/trades",
			subaccount_id
		);
		let mut query = Vec::new();
		if let Some(market_id) = market_id {
			query.push(("marketId".to_string(), market_id.to_string()));
		}
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_orderbooks_v2(
		&self,
		market_ids: &[String],
	) -> Result<OrderbooksResponse, TransportError> {
		let query: Vec<_> = market_ids
			.iter()
			.map(|id| ("marketIds".to_string(), id.clone()))
			.collect();
		let payload = self
			.transport
			.send_get("/api/exchange/spot/v2/orderbooks", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_orderbook_v2(
		&self,
		market_id: &str,
	) -> Result<OrderbookResponse, TransportError> {
		let path = format!("/api/exchange/spot/v2/orderbook/{}", market_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_atomic_swap_history(
		&self,
		address: &str,
		contract_address: Option<&str>,
	) -> Result<AtomicSwapHistoryResponse, TransportError> {
		let mut query = vec![("address".to_string(), address.to_string())];
		if let Some(contract_address) = contract_address {
			query.push((
				"contractAddress".to_string(),
				contract_address.to_string(),
			));
		}
		let payload = self
			.transport
			.send_get("/api/exchange/spot/v1/atomic_swap_history", &query)
			.await?;
		decode(payload)
	}
}
