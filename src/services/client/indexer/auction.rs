//! Auction indexer client.

use std::sync::Arc;

use crate::{
	models::indexer::{AuctionRoundResponse, AuctionsResponse},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct IndexerAuctionClient {
	transport: Arc<dyn GatewayTransport>,
}

impl IndexerAuctionClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	/// One auction round with its bid history. `round` of `None` fetches the
	/// latest round.
	pub async fn fetch_auction_round(
		&self,
		round: Option<i64>,
	) -> Result<AuctionRoundResponse, TransportError> {
		let path = match round {
			Some(round) => format!("/api/exchange/auction/v1/auction/{}", round),
			None => "/api/exchange/auction/v1/auction/latest".to_string(),
		};
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_auctions(&self) -> Result<AuctionsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/api/exchange/auction/v1/auctions", &[])
			.await?;
		decode(payload)
	}
}
