//! Exchange chain module client.
//!
//! Covers the on-chain exchange queries only; market and order views come
//! from the indexer spot/derivatives clients.

use std::sync::Arc;

use crate::{
	models::chain::{
		ExchangeModuleParamsResponse, ExchangeModuleStateResponse, ExchangePositionsResponse,
		FeeDiscountAccountInfo, FeeDiscountScheduleResponse, IsOptedOutOfRewardsResponse,
		SubaccountTradeNonceResponse, TradeRewardPointsResponse, TradingRewardsCampaignResponse,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct ExchangeClient {
	transport: Arc<dyn GatewayTransport>,
}

impl ExchangeClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(&self) -> Result<ExchangeModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/exchange/v1beta1/params", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_module_state(&self) -> Result<ExchangeModuleStateResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/exchange/v1beta1/module_state", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_fee_discount_schedule(
		&self,
	) -> Result<FeeDiscountScheduleResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/exchange/v1beta1/fee_discount_schedule", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_fee_discount_account_info(
		&self,
		account: &str,
	) -> Result<FeeDiscountAccountInfo, TransportError> {
		let path = format!(
			"/injective/exchange/v1beta1/fee_discount_account_info/{}",
			account
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_trading_rewards_campaign(
		&self,
	) -> Result<TradingRewardsCampaignResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/exchange/v1beta1/trading_rewards_campaign", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_trade_reward_points(
		&self,
		accounts: &[String],
	) -> Result<TradeRewardPointsResponse, TransportError> {
		let query: Vec<_> = accounts
			.iter()
			.map(|account| ("accounts".to_string(), account.clone()))
			.collect();
		let payload = self
			.transport
			.send_get("/injective/exchange/v1beta1/trade_reward_points", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_pending_trade_reward_points(
		&self,
		accounts: &[String],
	) -> Result<TradeRewardPointsResponse, TransportError> {
		let query: Vec<_> = accounts
			.iter()
			.map(|account| ("accounts".to_string(), account.clone()))
			.collect();
		let payload = self
			.transport
			.send_get(
				"/injective/exchange/v1beta1/pending_trade_reward_points",
				&query,
			)
			.await?;
		decode(payload)
	}

	pub async fn fetch_positions(&self) -> Result<ExchangePositionsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/injective/exchange/v1beta1/positions", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_subaccount_trade_nonce(
		&self,
		subaccount_id: &str,
	) -> Result<SubaccountTradeNonceResponse, TransportError> {
		let path = format!(
			"/injective/exchange/v1beta1/subaccount_trade_nonce/{}",
			subaccount_id
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_is_opted_out_of_rewards(
		&self,
		account: &str,
	) -> Result<IsOptedOutOfRewardsResponse, TransportError> {
		let path = format!(
			"/injective/exchange/v1beta1/is_opted_out_of_rewards/{}",
			account
		);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
