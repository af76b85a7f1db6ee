//! Trading strategies indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::GridStrategiesResponse,
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct TradingClient {
	transport: Arc<dyn GatewayTransport>,
}

impl TradingClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_grid_strategies(
		&self,
		account_address: Option<&str>,
		market_id: Option<&str>,
		state: Option<&str>,
	) -> Result<GridStrategiesResponse, TransportError> {
		let mut query = Vec::new();
		if let Some(account_address) = account_address {
			query.push(("accountAddress".to_string(), account_address.to_string()));
		}
		if let Some(market_id) = market_id {
			query.push(("marketId".to_string(), market_id.to_string()));
		}
		if let Some(state) = state {
			query.push(("state".to_string(), state.to_string()));
		}
		let payload = self
			.transport
			.send_get("/api/exchange/trading/v1/strategies", &query)
			.await?;
		decode(payload)
	}
}
