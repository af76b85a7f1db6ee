//! Auction chain module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::Coin;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionParams {
	#[serde(default)]
	pub auction_period: String,
	#[serde(default)]
	pub min_next_bid_increment_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionModuleParamsResponse {
	#[serde(default)]
	pub params: AuctionParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionModuleStateResponse {
	#[serde(default)]
	pub state: serde_json::Value,
}

/// The basket of coins up for auction in the current round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentBasketResponse {
	#[serde(default)]
	pub amount: Vec<Coin>,
	#[serde(default)]
	pub auction_round: String,
	#[serde(default)]
	pub auction_closing_time: String,
	#[serde(default)]
	pub highest_bidder: String,
	#[serde(default)]
	pub highest_bid_amount: String,
}
