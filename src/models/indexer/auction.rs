//! Auction indexer payloads (round history, distinct from the chain module).

use serde::{Deserialize, Serialize};

use crate::models::core::Coin;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionBid {
	#[serde(default)]
	pub bidder: String,
	#[serde(default)]
	pub amount: String,
	#[serde(default)]
	pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionRound {
	#[serde(default)]
	pub winner: String,
	#[serde(default)]
	pub basket: Vec<Coin>,
	#[serde(default)]
	pub winning_bid_amount: String,
	#[serde(default)]
	pub round: u64,
	#[serde(default)]
	pub end_timestamp: i64,
	#[serde(default)]
	pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionRoundResponse {
	#[serde(default)]
	pub auction: Option<AuctionRound>,
	#[serde(default)]
	pub bids: Vec<AuctionBid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionsResponse {
	#[serde(default)]
	pub auctions: Vec<AuctionRound>,
}
