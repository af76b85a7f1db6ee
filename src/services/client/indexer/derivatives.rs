//! Derivative and binary options indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{
		BinaryOptionsMarketResponse, BinaryOptionsMarketsResponse, DerivativeMarketResponse,
		DerivativeMarketsResponse, DerivativeOrderHistoryResponse, DerivativeOrdersResponse,
		DerivativeTradesResponse, FundingPaymentsResponse, FundingRatesResponse,
		OrderbookResponse, OrderbooksResponse, PositionsResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

/// Common filters for the subaccount-scoped derivative queries.
#[derive(Debug, Clone, Default)]
pub struct DerivativeOrderFilter {
	pub market_id: Option<String>,
	pub subaccount_id: Option<String>,
	pub direction: Option<String>,
}

impl DerivativeOrderFilter {
	fn to_query(&self) -> Vec<(String, String)> {
		let mut query = Vec::new();
		if let Some(market_id) = &self.market_id {
			query.push(("marketId".to_string(), market_id.clone()));
		}
		if let Some(subaccount_id) = &self.subaccount_id {
			query.push(("subaccountId".to_string(), subaccount_id.clone()));
		}
		if let Some(direction) = &self.direction {
			query.push(("direction".to_string(), direction.clone()));
		}
		query
	}
}

pub struct DerivativesClient {
	transport: Arc<dyn GatewayTransport>,
}

impl DerivativesClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_markets(&self) -> Result<DerivativeMarketsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v1/markets", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_market(
		&self,
		market_id: &str,
	) -> Result<DerivativeMarketResponse, TransportError> {
		let path = format!("/api/exchange/derivative/v1/markets/{}", market_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_binary_options_markets(
		&self,
	) -> Result<BinaryOptionsMarketsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v1/binary_options/markets", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_binary_options_market(
		&self,
		market_id: &str,
	) -> Result<BinaryOptionsMarketResponse, TransportError> {
		let path = format!(
			"/api/exchange/derivative/v1/binary_options/markets/{}",
			market_id
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_orders(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<DerivativeOrdersResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v1/orders", &filter.to_query())
			.await?;
		decode(payload)
	}

	pub async fn fetch_order_history(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<DerivativeOrderHistoryResponse, TransportError> {
		let payload = self
			.transport
			.send_get(
				"/api/exchange/derivative/v1/orders/history",
				&filter.to_query(),
			)
			.await?;
		decode(payload)
	}

	pub async fn fetch_positions(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<PositionsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v1/positions", &filter.to_query())
			.await?;
		decode(payload)
	}

	pub async fn fetch_positions_v2(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<PositionsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v2/positions", &filter.to_query())
			.await?;
		decode(payload)
	}

	pub async fn fetch_trades(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<DerivativeTradesResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v1/trades", &filter.to_query())
			.await?;
		decode(payload)
	}

	pub async fn fetch_funding_payments(
		&self,
		market_id: Option<&str>,
		subaccount_id: Option<&str>,
	) -> Result<FundingPaymentsResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(market_id) = market_id {
			query.push(("marketId".to_string(), market_id.to_string()));
		}
		if let Some(subaccount_id) = subaccount_id {
			query.push(("subaccountId".to_string(), subaccount_id.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v1/funding_payments", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_funding_rates(
		&self,
		market_id: &str,
	) -> Result<FundingRatesResponse, TransportError> {
		let query = vec![("marketId".to_string(), market_id.to_string())];
		let payload = self
			.transport
			.send_get("/api/exchange/derivative/v1/funding_rates", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_subaccount_orders(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<DerivativeOrdersResponse, TransportError> {
		let path = format!(
			"/api/exchange/derivative/v1/subaccount/{}/orders",
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
	) -> Result<DerivativeTradesResponse, TransportError> {
		let path = format!(
			"/api/exchange/derivative/v1/subaccount/{}/trades",
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
			.send_get("/api/exchange/derivative/v2/orderbooks", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_orderbook_v2(
		&self,
		market_id: &str,
	) -> Result<OrderbookResponse, TransportError> {
		let path = format!("/api/exchange/derivative/v2/orderbook/{}", market_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
