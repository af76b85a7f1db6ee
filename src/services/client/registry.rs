//! Module client registry.
//!
//! Builds every chain, indexer, and REST module client against the three
//! resolved endpoints. Construction is cheap and performs no network I/O;
//! all clients share one transport handle per endpoint so connection pools
//! are reused across modules.

use std::sync::Arc;

use anyhow::Context;

use crate::{
	models::EndpointSet,
	services::client::{
		chain::{
			AuctionClient, AuthClient, AuthRestClient, AuthzClient, BankClient,
			DistributionClient, ExchangeClient, GovClient, IbcClient, InsuranceClient,
			MintClient, OracleClient, PeggyClient, PermissionsClient, StakingClient,
			TendermintRestClient, TokenFactoryClient, WasmClient, WasmxClient,
		},
		indexer::{
			ArchiverClient, DerivativesClient, ExplorerClient, IndexerAccountClient,
			IndexerAuctionClient, IndexerInsuranceClient, IndexerOracleClient, MitoClient,
			PortfolioClient, SpotClient, TradingClient, Web3GatewayClient,
		},
		transports::{GatewayTransport, HttpTransportClient},
	},
};

/// One ready-to-use client per backend module.
///
/// Chain modules bind to the chain gateway, indexer modules to the indexer
/// endpoint, and the auth account and tendermint clients to the REST (LCD)
/// endpoint, which is the only place those queries are served.
pub struct ModuleClientRegistry {
	// chain gateway
	pub auction: AuctionClient,
	pub auth: AuthClient,
	pub authz: AuthzClient,
	pub bank: BankClient,
	pub distribution: DistributionClient,
	pub exchange: ExchangeClient,
	pub gov: GovClient,
	pub ibc: IbcClient,
	pub insurance: InsuranceClient,
	pub mint: MintClient,
	pub oracle: OracleClient,
	pub peggy: PeggyClient,
	pub permissions: PermissionsClient,
	pub staking: StakingClient,
	pub token_factory: TokenFactoryClient,
	pub wasm: WasmClient,
	pub wasmx: WasmxClient,
	// indexer
	pub indexer_account: IndexerAccountClient,
	pub indexer_archiver: ArchiverClient,
	pub indexer_auction: IndexerAuctionClient,
	pub indexer_derivatives: DerivativesClient,
	pub indexer_explorer: ExplorerClient,
	pub indexer_insurance: IndexerInsuranceClient,
	pub indexer_mito: MitoClient,
	pub indexer_oracle: IndexerOracleClient,
	pub indexer_portfolio: PortfolioClient,
	pub indexer_spot: SpotClient,
	pub indexer_trading: TradingClient,
	pub indexer_web3gw: Web3GatewayClient,
	// REST (LCD)
	pub rest_auth: AuthRestClient,
	pub rest_tendermint: TendermintRestClient,
}

impl ModuleClientRegistry {
	/// Builds the full registry against a resolved endpoint set.
	pub fn build(endpoints: &EndpointSet) -> Result<Self, anyhow::Error> {
		let chain: Arc<dyn GatewayTransport> = Arc::new(
			HttpTransportClient::new(endpoints.grpc.clone())
				.context("Failed to create chain gateway transport")?,
		);
		let indexer: Arc<dyn GatewayTransport> = Arc::new(
			HttpTransportClient::new(endpoints.indexer.clone())
				.context("Failed to create indexer transport")?,
		);
		let rest: Arc<dyn GatewayTransport> = Arc::new(
			HttpTransportClient::new(endpoints.rest.clone())
				.context("Failed to create REST transport")?,
		);

		Ok(Self::with_transports(chain, indexer, rest))
	}

	/// Wires every module client onto the given transport handles.
	///
	/// Split out from [`build`](Self::build) so tests can inject mock
	/// transports without touching the HTTP stack.
	pub fn with_transports(
		chain: Arc<dyn GatewayTransport>,
		indexer: Arc<dyn GatewayTransport>,
		rest: Arc<dyn GatewayTransport>,
	) -> Self {
		Self {
			auction: AuctionClient::new(chain.clone()),
			auth: AuthClient::new(chain.clone()),
			authz: AuthzClient::new(chain.clone()),
			bank: BankClient::new(chain.clone()),
			distribution: DistributionClient::new(chain.clone()),
			exchange: ExchangeClient::new(chain.clone()),
			gov: GovClient::new(chain.clone()),
			ibc: IbcClient::new(chain.clone()),
			insurance: InsuranceClient::new(chain.clone()),
			mint: MintClient::new(chain.clone()),
			oracle: OracleClient::new(chain.clone()),
			peggy: PeggyClient::new(chain.clone()),
			permissions: PermissionsClient::new(chain.clone()),
			staking: StakingClient::new(chain.clone()),
			token_factory: TokenFactoryClient::new(chain.clone()),
			wasm: WasmClient::new(chain.clone()),
			wasmx: WasmxClient::new(chain),
			indexer_account: IndexerAccountClient::new(indexer.clone()),
			indexer_archiver: ArchiverClient::new(indexer.clone()),
			indexer_auction: IndexerAuctionClient::new(indexer.clone()),
			indexer_derivatives: DerivativesClient::new(indexer.clone()),
			indexer_explorer: ExplorerClient::new(indexer.clone()),
			indexer_insurance: IndexerInsuranceClient::new(indexer.clone()),
			indexer_mito: MitoClient::new(indexer.clone()),
			indexer_oracle: IndexerOracleClient::new(indexer.clone()),
			indexer_portfolio: PortfolioClient::new(indexer.clone()),
			indexer_spot: SpotClient::new(indexer.clone()),
			indexer_trading: TradingClient::new(indexer.clone()),
			indexer_web3gw: Web3GatewayClient::new(indexer),
			rest_auth: AuthRestClient::new(rest.clone()),
			rest_tendermint: TendermintRestClient::new(rest),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::NetworkSelector;

	#[test]
	fn test_build_performs_no_io() {
		// Unreachable endpoints must not fail construction.
		let endpoints = EndpointSet::from_urls(
			"http://127.0.0.1:1",
			"http://127.0.0.1:2",
			"http://127.0.0.1:3",
		)
		.unwrap();
		assert!(ModuleClientRegistry::build(&endpoints).is_ok());
	}

	#[test]
	fn test_build_against_every_network() {
		for selector in [
			NetworkSelector::Mainnet,
			NetworkSelector::Testnet,
			NetworkSelector::Devnet,
			NetworkSelector::LocalNet,
		] {
			let endpoints = EndpointSet::resolve(selector);
			assert!(ModuleClientRegistry::build(&endpoints).is_ok());
		}
	}
}
