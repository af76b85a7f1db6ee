//! Account portfolio indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{AccountPortfolioBalancesResponse, AccountPortfolioResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct PortfolioClient {
	transport: Arc<dyn GatewayTransport>,
}

impl PortfolioClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_portfolio(
		&self,
		address: &str,
	) -> Result<AccountPortfolioResponse, TransportError> {
		let path = format!("/api/exchange/portfolio/v2/portfolio/{}", address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_portfolio_balances(
		&self,
		address: &str,
	) -> Result<AccountPortfolioBalancesResponse, TransportError> {
		let path = format!("/api/exchange/portfolio/v2/portfolio/{}/balances", address);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
