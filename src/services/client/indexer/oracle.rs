//! Oracle indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{OracleListResponse, OraclePriceResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct IndexerOracleClient {
	transport: Arc<dyn GatewayTransport>,
}

impl IndexerOracleClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_oracle_list(&self) -> Result<OracleListResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/oracle/v1/oracles", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_oracle_price(
		&self,
		base_symbol: &str,
		quote_symbol: &str,
		oracle_type: &str,
	) -> Result<OraclePriceResponse, TransportError> {
		let path = format!(
			"/api/exchange/oracle/v1/price/{}/{}/{}",
			base_symbol, quote_symbol, oracle_type
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
