//! The unified client facade.
//!
//! [`InjectiveClient`] is the single entry point of the crate. Construction
//! resolves the network endpoints, derives the caller identity, and builds
//! the module client registry; after that the client is immutable and every
//! operation is a thin delegation through the dispatcher, which maps any
//! transport failure into exactly one [`NormalizedFault`].
//!
//! Operations are grouped by backend module and named after the module they
//! hit, so `fetch_bank_balance` and `fetch_spot_markets` read the same way
//! the backend routes do.

use std::fmt;

use anyhow::Context;
use serde_json::Value;

use crate::{
	models::{chain, indexer, EndpointSet, Identity, NetworkSelector, PageRequest, SecretString},
	services::client::{
		dispatcher,
		error::NormalizedFault,
		indexer::{DerivativeOrderFilter, SpotOrderFilter},
		registry::ModuleClientRegistry,
	},
};

/// The network a client is bound to and its resolved endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
	pub network: NetworkSelector,
	pub endpoints: EndpointSet,
}

/// Unified read client over the Injective chain, indexer, and REST APIs.
///
/// All state is fixed at construction; the client is `Send + Sync` and can
/// be shared across tasks, with concurrent calls proceeding independently.
pub struct InjectiveClient {
	network: NetworkSelector,
	endpoints: EndpointSet,
	identity: Identity,
	registry: ModuleClientRegistry,
}

// The registry holds trait-object transports, so Debug is written by hand
// and shows the network binding and identity only.
impl fmt::Debug for InjectiveClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InjectiveClient")
			.field("network", &self.network)
			.field("identity", &self.identity)
			.finish_non_exhaustive()
	}
}

impl InjectiveClient {
	/// Builds a client for a known network.
	///
	/// Exactly one of `private_key` and `address` must be usable; the key
	/// takes precedence when both are given. Construction performs no
	/// network I/O and cannot half-succeed.
	pub fn new(
		network: NetworkSelector,
		private_key: Option<&SecretString>,
		address: Option<&str>,
	) -> Result<Self, anyhow::Error> {
		let endpoints = EndpointSet::resolve(network);
		Self::with_endpoints(network, endpoints, private_key, address)
	}

	/// Builds a client against explicit endpoints.
	///
	/// Used for custom deployments and for tests that point the client at a
	/// local mock server.
	pub fn with_endpoints(
		network: NetworkSelector,
		endpoints: EndpointSet,
		private_key: Option<&SecretString>,
		address: Option<&str>,
	) -> Result<Self, anyhow::Error> {
		let identity =
			Identity::derive(private_key, address).context("Failed to derive client identity")?;
		let registry = ModuleClientRegistry::build(&endpoints)
			.context("Failed to build module client registry")?;

		Ok(Self {
			network,
			endpoints,
			identity,
			registry,
		})
	}

	/// The identity the client was constructed with.
	pub fn identity(&self) -> &Identity {
		&self.identity
	}

	/// The network selector the client was constructed with.
	pub fn network(&self) -> NetworkSelector {
		self.network
	}

	/// The network and the endpoints every module client is bound to.
	pub fn network_info(&self) -> NetworkInfo {
		NetworkInfo {
			network: self.network,
			endpoints: self.endpoints.clone(),
		}
	}

	/// Probes backend liveness with the auth module-params query.
	///
	/// Maps every outcome to a boolean and never raises; repeated calls are
	/// independent and have no side effects on the client.
	pub async fn is_alive(&self) -> bool {
		dispatcher::query(self.registry.auth.fetch_module_params())
			.await
			.is_ok()
	}

	// ---- auction module ----

	pub async fn fetch_auction_module_params(
		&self,
	) -> Result<chain::AuctionModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.auction.fetch_module_params()).await
	}

	pub async fn fetch_auction_module_state(
		&self,
	) -> Result<chain::AuctionModuleStateResponse, NormalizedFault> {
		dispatcher::query(self.registry.auction.fetch_module_state()).await
	}

	pub async fn fetch_current_basket(
		&self,
	) -> Result<chain::CurrentBasketResponse, NormalizedFault> {
		dispatcher::query(self.registry.auction.fetch_current_basket()).await
	}

	pub async fn fetch_auction_round(
		&self,
		round: Option<i64>,
	) -> Result<indexer::AuctionRoundResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_auction.fetch_auction_round(round)).await
	}

	pub async fn fetch_auctions(&self) -> Result<indexer::AuctionsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_auction.fetch_auctions()).await
	}

	// ---- auth module ----

	pub async fn fetch_auth_module_params(
		&self,
	) -> Result<chain::AuthModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.auth.fetch_module_params()).await
	}

	pub async fn fetch_accounts(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<chain::AccountsResponse, NormalizedFault> {
		dispatcher::query(self.registry.auth.fetch_accounts(pagination)).await
	}

	pub async fn fetch_account(
		&self,
		address: &str,
	) -> Result<chain::AccountResponse, NormalizedFault> {
		dispatcher::query(self.registry.rest_auth.fetch_account(address)).await
	}

	// ---- authz module ----

	pub async fn fetch_grants(
		&self,
		granter: &str,
		grantee: &str,
		msg_type_url: Option<&str>,
	) -> Result<chain::GrantsResponse, NormalizedFault> {
		dispatcher::query(self.registry.authz.fetch_grants(granter, grantee, msg_type_url)).await
	}

	pub async fn fetch_granter_grants(
		&self,
		granter: &str,
	) -> Result<chain::GrantsResponse, NormalizedFault> {
		dispatcher::query(self.registry.authz.fetch_granter_grants(granter)).await
	}

	pub async fn fetch_grantee_grants(
		&self,
		grantee: &str,
	) -> Result<chain::GrantsResponse, NormalizedFault> {
		dispatcher::query(self.registry.authz.fetch_grantee_grants(grantee)).await
	}

	// ---- bank module ----

	pub async fn fetch_bank_module_params(
		&self,
	) -> Result<chain::BankModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_module_params()).await
	}

	pub async fn fetch_balance(
		&self,
		address: &str,
		denom: &str,
	) -> Result<chain::BalanceResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_balance(address, denom)).await
	}

	pub async fn fetch_balances(
		&self,
		address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::BalancesResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_balances(address, pagination)).await
	}

	pub async fn fetch_total_supply(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<chain::TotalSupplyResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_total_supply(pagination)).await
	}

	pub async fn fetch_supply_of(
		&self,
		denom: &str,
	) -> Result<chain::SupplyOfResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_supply_of(denom)).await
	}

	pub async fn fetch_denoms_metadata(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<chain::DenomsMetadataResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_denoms_metadata(pagination)).await
	}

	pub async fn fetch_denom_metadata(
		&self,
		denom: &str,
	) -> Result<chain::DenomMetadataResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_denom_metadata(denom)).await
	}

	pub async fn fetch_denom_owners(
		&self,
		denom: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::DenomOwnersResponse, NormalizedFault> {
		dispatcher::query(self.registry.bank.fetch_denom_owners(denom, pagination)).await
	}

	// ---- distribution module ----

	pub async fn fetch_distribution_module_params(
		&self,
	) -> Result<chain::DistributionModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.distribution.fetch_module_params()).await
	}

	pub async fn fetch_delegator_rewards_for_validator(
		&self,
		delegator_address: &str,
		validator_address: &str,
	) -> Result<chain::DelegationRewardResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.distribution
				.fetch_delegator_rewards_for_validator(delegator_address, validator_address),
		)
		.await
	}

	pub async fn fetch_delegator_rewards(
		&self,
		delegator_address: &str,
	) -> Result<chain::DelegatorRewardsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.distribution
				.fetch_delegator_rewards(delegator_address),
		)
		.await
	}

	// ---- exchange module (chain) ----

	pub async fn fetch_exchange_module_params(
		&self,
	) -> Result<chain::ExchangeModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_module_params()).await
	}

	pub async fn fetch_exchange_module_state(
		&self,
	) -> Result<chain::ExchangeModuleStateResponse, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_module_state()).await
	}

	pub async fn fetch_fee_discount_schedule(
		&self,
	) -> Result<chain::FeeDiscountScheduleResponse, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_fee_discount_schedule()).await
	}

	pub async fn fetch_fee_discount_account_info(
		&self,
		account: &str,
	) -> Result<chain::FeeDiscountAccountInfo, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_fee_discount_account_info(account)).await
	}

	pub async fn fetch_trading_rewards_campaign(
		&self,
	) -> Result<chain::TradingRewardsCampaignResponse, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_trading_rewards_campaign()).await
	}

	pub async fn fetch_trade_reward_points(
		&self,
		accounts: &[String],
	) -> Result<chain::TradeRewardPointsResponse, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_trade_reward_points(accounts)).await
	}

	pub async fn fetch_pending_trade_reward_points(
		&self,
		accounts: &[String],
	) -> Result<chain::TradeRewardPointsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.exchange
				.fetch_pending_trade_reward_points(accounts),
		)
		.await
	}

	pub async fn fetch_exchange_positions(
		&self,
	) -> Result<chain::ExchangePositionsResponse, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_positions()).await
	}

	pub async fn fetch_subaccount_trade_nonce(
		&self,
		subaccount_id: &str,
	) -> Result<chain::SubaccountTradeNonceResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.exchange
				.fetch_subaccount_trade_nonce(subaccount_id),
		)
		.await
	}

	pub async fn fetch_is_opted_out_of_rewards(
		&self,
		account: &str,
	) -> Result<chain::IsOptedOutOfRewardsResponse, NormalizedFault> {
		dispatcher::query(self.registry.exchange.fetch_is_opted_out_of_rewards(account)).await
	}

	// ---- governance module ----

	pub async fn fetch_governance_module_params(
		&self,
	) -> Result<chain::GovernanceModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.gov.fetch_module_params()).await
	}

	pub async fn fetch_proposals(
		&self,
		proposal_status: Option<&str>,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ProposalsResponse, NormalizedFault> {
		dispatcher::query(self.registry.gov.fetch_proposals(proposal_status, pagination)).await
	}

	pub async fn fetch_proposal(
		&self,
		proposal_id: u64,
	) -> Result<chain::ProposalResponse, NormalizedFault> {
		dispatcher::query(self.registry.gov.fetch_proposal(proposal_id)).await
	}

	pub async fn fetch_proposal_deposits(
		&self,
		proposal_id: u64,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ProposalDepositsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.gov
				.fetch_proposal_deposits(proposal_id, pagination),
		)
		.await
	}

	pub async fn fetch_proposal_votes(
		&self,
		proposal_id: u64,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ProposalVotesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.gov
				.fetch_proposal_votes(proposal_id, pagination),
		)
		.await
	}

	pub async fn fetch_proposal_tally(
		&self,
		proposal_id: u64,
	) -> Result<chain::ProposalTallyResponse, NormalizedFault> {
		dispatcher::query(self.registry.gov.fetch_proposal_tally(proposal_id)).await
	}

	// ---- ibc transfer module ----

	pub async fn fetch_denom_trace(
		&self,
		hash: &str,
	) -> Result<chain::DenomTraceResponse, NormalizedFault> {
		dispatcher::query(self.registry.ibc.fetch_denom_trace(hash)).await
	}

	pub async fn fetch_denom_traces(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<chain::DenomTracesResponse, NormalizedFault> {
		dispatcher::query(self.registry.ibc.fetch_denom_traces(pagination)).await
	}

	// ---- insurance module (chain) ----

	pub async fn fetch_insurance_module_params(
		&self,
	) -> Result<chain::InsuranceModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.insurance.fetch_module_params()).await
	}

	pub async fn fetch_insurance_funds(
		&self,
	) -> Result<chain::InsuranceFundsResponse, NormalizedFault> {
		dispatcher::query(self.registry.insurance.fetch_insurance_funds()).await
	}

	pub async fn fetch_insurance_fund(
		&self,
		market_id: &str,
	) -> Result<chain::InsuranceFundResponse, NormalizedFault> {
		dispatcher::query(self.registry.insurance.fetch_insurance_fund(market_id)).await
	}

	pub async fn fetch_estimated_redemptions(
		&self,
		market_id: &str,
		address: &str,
	) -> Result<chain::EstimatedRedemptionsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.insurance
				.fetch_estimated_redemptions(market_id, address),
		)
		.await
	}

	pub async fn fetch_pending_redemptions(
		&self,
		market_id: &str,
		address: &str,
	) -> Result<chain::PendingRedemptionsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.insurance
				.fetch_pending_redemptions(market_id, address),
		)
		.await
	}

	// ---- mint module ----

	pub async fn fetch_mint_module_params(
		&self,
	) -> Result<chain::MintModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.mint.fetch_module_params()).await
	}

	pub async fn fetch_inflation(&self) -> Result<chain::InflationResponse, NormalizedFault> {
		dispatcher::query(self.registry.mint.fetch_inflation()).await
	}

	pub async fn fetch_annual_provisions(
		&self,
	) -> Result<chain::AnnualProvisionsResponse, NormalizedFault> {
		dispatcher::query(self.registry.mint.fetch_annual_provisions()).await
	}

	// ---- oracle module ----

	pub async fn fetch_oracle_module_params(
		&self,
	) -> Result<chain::OracleModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.oracle.fetch_module_params()).await
	}

	pub async fn fetch_oracle_list(&self) -> Result<indexer::OracleListResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_oracle.fetch_oracle_list()).await
	}

	pub async fn fetch_oracle_price(
		&self,
		base_symbol: &str,
		quote_symbol: &str,
		oracle_type: &str,
	) -> Result<indexer::OraclePriceResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_oracle.fetch_oracle_price(
			base_symbol,
			quote_symbol,
			oracle_type,
		))
		.await
	}

	// ---- peggy module ----

	pub async fn fetch_peggy_module_params(
		&self,
	) -> Result<chain::PeggyModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.peggy.fetch_module_params()).await
	}

	// ---- permissions module ----

	pub async fn fetch_permissions_module_params(
		&self,
	) -> Result<chain::PermissionsModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.permissions.fetch_module_params()).await
	}

	pub async fn fetch_all_namespaces(
		&self,
	) -> Result<chain::AllNamespacesResponse, NormalizedFault> {
		dispatcher::query(self.registry.permissions.fetch_all_namespaces()).await
	}

	pub async fn fetch_namespace_by_denom(
		&self,
		denom: &str,
		include_roles: bool,
	) -> Result<chain::NamespaceByDenomResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.permissions
				.fetch_namespace_by_denom(denom, include_roles),
		)
		.await
	}

	pub async fn fetch_address_roles(
		&self,
		denom: &str,
		address: &str,
	) -> Result<chain::AddressRolesResponse, NormalizedFault> {
		dispatcher::query(self.registry.permissions.fetch_address_roles(denom, address)).await
	}

	pub async fn fetch_addresses_by_role(
		&self,
		denom: &str,
		role: &str,
	) -> Result<chain::AddressesByRoleResponse, NormalizedFault> {
		dispatcher::query(self.registry.permissions.fetch_addresses_by_role(denom, role)).await
	}

	pub async fn fetch_vouchers_for_address(
		&self,
		address: &str,
	) -> Result<chain::VouchersForAddressResponse, NormalizedFault> {
		dispatcher::query(self.registry.permissions.fetch_vouchers_for_address(address)).await
	}

	// ---- staking module ----

	pub async fn fetch_staking_module_params(
		&self,
	) -> Result<chain::StakingModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.staking.fetch_module_params()).await
	}

	pub async fn fetch_staking_pool(&self) -> Result<chain::StakingPoolResponse, NormalizedFault> {
		dispatcher::query(self.registry.staking.fetch_pool()).await
	}

	pub async fn fetch_validators(
		&self,
		status: Option<&str>,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ValidatorsResponse, NormalizedFault> {
		dispatcher::query(self.registry.staking.fetch_validators(status, pagination)).await
	}

	pub async fn fetch_validator(
		&self,
		validator_address: &str,
	) -> Result<chain::ValidatorResponse, NormalizedFault> {
		dispatcher::query(self.registry.staking.fetch_validator(validator_address)).await
	}

	pub async fn fetch_validator_delegations(
		&self,
		validator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::DelegationsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.staking
				.fetch_validator_delegations(validator_address, pagination),
		)
		.await
	}

	pub async fn fetch_validator_unbonding_delegations(
		&self,
		validator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::UnbondingDelegationsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.staking
				.fetch_validator_unbonding_delegations(validator_address, pagination),
		)
		.await
	}

	pub async fn fetch_delegation(
		&self,
		delegator_address: &str,
		validator_address: &str,
	) -> Result<chain::DelegationEntry, NormalizedFault> {
		dispatcher::query(
			self.registry
				.staking
				.fetch_delegation(delegator_address, validator_address),
		)
		.await
	}

	pub async fn fetch_delegations(
		&self,
		delegator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::DelegationsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.staking
				.fetch_delegations(delegator_address, pagination),
		)
		.await
	}

	pub async fn fetch_unbonding_delegations(
		&self,
		delegator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::UnbondingDelegationsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.staking
				.fetch_unbonding_delegations(delegator_address, pagination),
		)
		.await
	}

	pub async fn fetch_redelegations(
		&self,
		delegator_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::RedelegationsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.staking
				.fetch_redelegations(delegator_address, pagination),
		)
		.await
	}

	// ---- token factory module ----

	pub async fn fetch_token_factory_module_params(
		&self,
	) -> Result<chain::TokenFactoryModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.token_factory.fetch_module_params()).await
	}

	pub async fn fetch_token_factory_module_state(
		&self,
	) -> Result<chain::TokenFactoryModuleStateResponse, NormalizedFault> {
		dispatcher::query(self.registry.token_factory.fetch_module_state()).await
	}

	pub async fn fetch_denoms_from_creator(
		&self,
		creator: &str,
	) -> Result<chain::DenomsFromCreatorResponse, NormalizedFault> {
		dispatcher::query(self.registry.token_factory.fetch_denoms_from_creator(creator)).await
	}

	pub async fn fetch_denom_authority_metadata(
		&self,
		creator: &str,
		sub_denom: &str,
	) -> Result<chain::DenomAuthorityMetadataResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.token_factory
				.fetch_denom_authority_metadata(creator, sub_denom),
		)
		.await
	}

	// ---- wasm module ----

	pub async fn fetch_contract_info(
		&self,
		contract_address: &str,
	) -> Result<chain::ContractInfoResponse, NormalizedFault> {
		dispatcher::query(self.registry.wasm.fetch_contract_info(contract_address)).await
	}

	pub async fn fetch_contract_history(
		&self,
		contract_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ContractHistoryResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.wasm
				.fetch_contract_history(contract_address, pagination),
		)
		.await
	}

	pub async fn fetch_smart_contract_state(
		&self,
		contract_address: &str,
		query: &Value,
	) -> Result<chain::SmartContractStateResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.wasm
				.fetch_smart_contract_state(contract_address, query),
		)
		.await
	}

	pub async fn fetch_raw_contract_state(
		&self,
		contract_address: &str,
		query_data: &[u8],
	) -> Result<chain::RawContractStateResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.wasm
				.fetch_raw_contract_state(contract_address, query_data),
		)
		.await
	}

	pub async fn fetch_contract_codes(
		&self,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ContractCodesResponse, NormalizedFault> {
		dispatcher::query(self.registry.wasm.fetch_contract_codes(pagination)).await
	}

	pub async fn fetch_contract_code(
		&self,
		code_id: u64,
	) -> Result<chain::ContractCodeResponse, NormalizedFault> {
		dispatcher::query(self.registry.wasm.fetch_contract_code(code_id)).await
	}

	pub async fn fetch_contracts_by_code(
		&self,
		code_id: u64,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ContractsByCodeResponse, NormalizedFault> {
		dispatcher::query(self.registry.wasm.fetch_contracts_by_code(code_id, pagination)).await
	}

	pub async fn fetch_contract_accounts_balance(
		&self,
		contract_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::BalancesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.wasm
				.fetch_contract_accounts_balance(contract_address, pagination),
		)
		.await
	}

	pub async fn fetch_contract_state(
		&self,
		contract_address: &str,
		pagination: Option<&PageRequest>,
	) -> Result<chain::ContractStateResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.wasm
				.fetch_contract_state(contract_address, pagination),
		)
		.await
	}

	// ---- wasmx module ----

	pub async fn fetch_wasmx_module_params(
		&self,
	) -> Result<chain::WasmxModuleParamsResponse, NormalizedFault> {
		dispatcher::query(self.registry.wasmx.fetch_module_params()).await
	}

	pub async fn fetch_wasmx_module_state(
		&self,
	) -> Result<chain::WasmxModuleStateResponse, NormalizedFault> {
		dispatcher::query(self.registry.wasmx.fetch_module_state()).await
	}

	// ---- tendermint (REST) ----

	pub async fn fetch_latest_block(&self) -> Result<chain::LatestBlockResponse, NormalizedFault> {
		dispatcher::query(self.registry.rest_tendermint.fetch_latest_block()).await
	}

	pub async fn fetch_node_info(&self) -> Result<chain::NodeInfoResponse, NormalizedFault> {
		dispatcher::query(self.registry.rest_tendermint.fetch_node_info()).await
	}

	pub async fn fetch_syncing(&self) -> Result<chain::SyncingResponse, NormalizedFault> {
		dispatcher::query(self.registry.rest_tendermint.fetch_syncing()).await
	}

	// ---- indexer: account ----

	pub async fn fetch_trading_rewards(
		&self,
		address: &str,
		epoch: Option<i64>,
	) -> Result<indexer::RewardsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_account.fetch_rewards(address, epoch)).await
	}

	pub async fn fetch_subaccounts(
		&self,
		address: &str,
	) -> Result<indexer::SubaccountsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_account.fetch_subaccounts(address)).await
	}

	pub async fn fetch_subaccount_balances(
		&self,
		subaccount_id: &str,
	) -> Result<indexer::SubaccountBalancesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_account
				.fetch_subaccount_balances(subaccount_id),
		)
		.await
	}

	pub async fn fetch_subaccount_history(
		&self,
		subaccount_id: &str,
		denom: Option<&str>,
	) -> Result<indexer::SubaccountHistoryResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_account
				.fetch_subaccount_history(subaccount_id, denom),
		)
		.await
	}

	pub async fn fetch_subaccount_order_summary(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<indexer::SubaccountOrderSummaryResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_account
				.fetch_subaccount_order_summary(subaccount_id, market_id),
		)
		.await
	}

	/// Resolves the current state of previously placed orders.
	///
	/// The only facade operation that submits a request body; it goes
	/// through the request dispatch path and faults carry the `request`
	/// operation tag.
	pub async fn fetch_order_states(
		&self,
		spot_order_hashes: &[String],
		derivative_order_hashes: &[String],
	) -> Result<indexer::OrderStatesResponse, NormalizedFault> {
		dispatcher::request(
			self.registry
				.indexer_account
				.fetch_order_states(spot_order_hashes, derivative_order_hashes),
		)
		.await
	}

	// ---- indexer: portfolio ----

	pub async fn fetch_portfolio(
		&self,
		address: &str,
	) -> Result<indexer::AccountPortfolioResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_portfolio.fetch_portfolio(address)).await
	}

	pub async fn fetch_portfolio_balances(
		&self,
		address: &str,
	) -> Result<indexer::AccountPortfolioBalancesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_portfolio
				.fetch_portfolio_balances(address),
		)
		.await
	}

	// ---- indexer: spot ----

	pub async fn fetch_spot_markets(&self) -> Result<indexer::SpotMarketsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_spot.fetch_markets()).await
	}

	pub async fn fetch_spot_market(
		&self,
		market_id: &str,
	) -> Result<indexer::SpotMarketResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_spot.fetch_market(market_id)).await
	}

	pub async fn fetch_spot_orders(
		&self,
		filter: &SpotOrderFilter,
	) -> Result<indexer::SpotOrdersResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_spot.fetch_orders(filter)).await
	}

	pub async fn fetch_spot_order_history(
		&self,
		filter: &SpotOrderFilter,
	) -> Result<indexer::SpotOrderHistoryResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_spot.fetch_order_history(filter)).await
	}

	pub async fn fetch_spot_trades(
		&self,
		filter: &SpotOrderFilter,
	) -> Result<indexer::SpotTradesResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_spot.fetch_trades(filter)).await
	}

	pub async fn fetch_spot_subaccount_orders(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<indexer::SpotOrdersResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_spot
				.fetch_subaccount_orders(subaccount_id, market_id),
		)
		.await
	}

	pub async fn fetch_spot_subaccount_trades(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<indexer::SpotTradesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_spot
				.fetch_subaccount_trades(subaccount_id, market_id),
		)
		.await
	}

	pub async fn fetch_spot_orderbooks(
		&self,
		market_ids: &[String],
	) -> Result<indexer::OrderbooksResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_spot.fetch_orderbooks_v2(market_ids)).await
	}

	pub async fn fetch_spot_orderbook(
		&self,
		market_id: &str,
	) -> Result<indexer::OrderbookResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_spot.fetch_orderbook_v2(market_id)).await
	}

	pub async fn fetch_atomic_swap_history(
		&self,
		address: &str,
		contract_address: Option<&str>,
	) -> Result<indexer::AtomicSwapHistoryResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_spot
				.fetch_atomic_swap_history(address, contract_address),
		)
		.await
	}

	// ---- indexer: derivatives ----

	pub async fn fetch_derivative_markets(
		&self,
	) -> Result<indexer::DerivativeMarketsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_markets()).await
	}

	pub async fn fetch_derivative_market(
		&self,
		market_id: &str,
	) -> Result<indexer::DerivativeMarketResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_market(market_id)).await
	}

	pub async fn fetch_binary_options_markets(
		&self,
	) -> Result<indexer::BinaryOptionsMarketsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_binary_options_markets()).await
	}

	pub async fn fetch_binary_options_market(
		&self,
		market_id: &str,
	) -> Result<indexer::BinaryOptionsMarketResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_derivatives
				.fetch_binary_options_market(market_id),
		)
		.await
	}

	pub async fn fetch_derivative_orders(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<indexer::DerivativeOrdersResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_orders(filter)).await
	}

	pub async fn fetch_derivative_order_history(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<indexer::DerivativeOrderHistoryResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_order_history(filter)).await
	}

	pub async fn fetch_positions(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<indexer::PositionsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_positions(filter)).await
	}

	pub async fn fetch_positions_v2(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<indexer::PositionsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_positions_v2(filter)).await
	}

	pub async fn fetch_derivative_trades(
		&self,
		filter: &DerivativeOrderFilter,
	) -> Result<indexer::DerivativeTradesResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_trades(filter)).await
	}

	pub async fn fetch_funding_payments(
		&self,
		market_id: Option<&str>,
		subaccount_id: Option<&str>,
	) -> Result<indexer::FundingPaymentsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_derivatives
				.fetch_funding_payments(market_id, subaccount_id),
		)
		.await
	}

	pub async fn fetch_funding_rates(
		&self,
		market_id: &str,
	) -> Result<indexer::FundingRatesResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_funding_rates(market_id)).await
	}

	pub async fn fetch_derivative_subaccount_orders(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<indexer::DerivativeOrdersResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_derivatives
				.fetch_subaccount_orders(subaccount_id, market_id),
		)
		.await
	}

	pub async fn fetch_derivative_subaccount_trades(
		&self,
		subaccount_id: &str,
		market_id: Option<&str>,
	) -> Result<indexer::DerivativeTradesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_derivatives
				.fetch_subaccount_trades(subaccount_id, market_id),
		)
		.await
	}

	pub async fn fetch_derivative_orderbooks(
		&self,
		market_ids: &[String],
	) -> Result<indexer::OrderbooksResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_derivatives
				.fetch_orderbooks_v2(market_ids),
		)
		.await
	}

	pub async fn fetch_derivative_orderbook(
		&self,
		market_id: &str,
	) -> Result<indexer::OrderbookResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_derivatives.fetch_orderbook_v2(market_id)).await
	}

	// ---- indexer: insurance ----

	pub async fn fetch_indexer_insurance_funds(
		&self,
	) -> Result<indexer::IndexerInsuranceFundsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_insurance.fetch_insurance_funds()).await
	}

	pub async fn fetch_insurance_redemptions(
		&self,
		redeemer: Option<&str>,
		redemption_denom: Option<&str>,
	) -> Result<indexer::InsuranceRedemptionsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_insurance
				.fetch_redemptions(redeemer, redemption_denom),
		)
		.await
	}

	// ---- indexer: explorer ----

	pub async fn fetch_tx_by_hash(&self, hash: &str) -> Result<indexer::ExplorerTx, NormalizedFault> {
		dispatcher::query(self.registry.indexer_explorer.fetch_tx_by_hash(hash)).await
	}

	pub async fn fetch_account_txs(
		&self,
		address: &str,
		limit: Option<i32>,
	) -> Result<indexer::TxsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_explorer.fetch_account_txs(address, limit)).await
	}

	pub async fn fetch_explorer_validator(
		&self,
		validator_address: &str,
	) -> Result<indexer::ExplorerValidatorResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_explorer.fetch_validator(validator_address)).await
	}

	pub async fn fetch_validator_uptime(
		&self,
		validator_address: &str,
	) -> Result<indexer::ValidatorUptimeResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_explorer
				.fetch_validator_uptime(validator_address),
		)
		.await
	}

	pub async fn fetch_peggy_deposit_txs(
		&self,
		sender: Option<&str>,
		receiver: Option<&str>,
	) -> Result<indexer::PeggyDepositTxsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_explorer
				.fetch_peggy_deposit_txs(sender, receiver),
		)
		.await
	}

	pub async fn fetch_peggy_withdrawal_txs(
		&self,
		sender: Option<&str>,
		receiver: Option<&str>,
	) -> Result<indexer::PeggyWithdrawalTxsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_explorer
				.fetch_peggy_withdrawal_txs(sender, receiver),
		)
		.await
	}

	pub async fn fetch_blocks(
		&self,
		limit: Option<i32>,
	) -> Result<indexer::BlocksResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_explorer.fetch_blocks(limit)).await
	}

	pub async fn fetch_block(
		&self,
		block_id: &str,
	) -> Result<indexer::BlockResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_explorer.fetch_block(block_id)).await
	}

	pub async fn fetch_txs(
		&self,
		tx_type: Option<&str>,
		limit: Option<i32>,
	) -> Result<indexer::TxsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_explorer.fetch_txs(tx_type, limit)).await
	}

	pub async fn fetch_ibc_transfer_txs(
		&self,
		sender: Option<&str>,
		receiver: Option<&str>,
	) -> Result<indexer::IbcTransferTxsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_explorer
				.fetch_ibc_transfer_txs(sender, receiver),
		)
		.await
	}

	pub async fn fetch_explorer_stats(
		&self,
	) -> Result<indexer::ExplorerStatsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_explorer.fetch_stats()).await
	}

	// ---- indexer: archiver ----

	pub async fn fetch_historical_balance(
		&self,
		account: &str,
		resolution: &str,
	) -> Result<indexer::HistoricalBalanceResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_archiver
				.fetch_historical_balance(account, resolution),
		)
		.await
	}

	pub async fn fetch_historical_rpnl(
		&self,
		account: &str,
		resolution: &str,
	) -> Result<indexer::HistoricalRpnlResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_archiver
				.fetch_historical_rpnl(account, resolution),
		)
		.await
	}

	pub async fn fetch_historical_volumes(
		&self,
		account: &str,
		resolution: &str,
	) -> Result<indexer::HistoricalVolumesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_archiver
				.fetch_historical_volumes(account, resolution),
		)
		.await
	}

	pub async fn fetch_pnl_leaderboard(
		&self,
		start_date: &str,
		end_date: &str,
		limit: Option<i32>,
	) -> Result<indexer::PnlLeaderboardResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_archiver
				.fetch_pnl_leaderboard(start_date, end_date, limit),
		)
		.await
	}

	pub async fn fetch_vol_leaderboard(
		&self,
		start_date: &str,
		end_date: &str,
		limit: Option<i32>,
	) -> Result<indexer::VolLeaderboardResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_archiver
				.fetch_vol_leaderboard(start_date, end_date, limit),
		)
		.await
	}

	pub async fn fetch_pnl_leaderboard_fixed_resolution(
		&self,
		resolution: &str,
		limit: Option<i32>,
	) -> Result<indexer::PnlLeaderboardResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_archiver
				.fetch_pnl_leaderboard_fixed_resolution(resolution, limit),
		)
		.await
	}

	pub async fn fetch_vol_leaderboard_fixed_resolution(
		&self,
		resolution: &str,
		limit: Option<i32>,
	) -> Result<indexer::VolLeaderboardResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_archiver
				.fetch_vol_leaderboard_fixed_resolution(resolution, limit),
		)
		.await
	}

	pub async fn fetch_denom_holders(
		&self,
		denom: &str,
		limit: Option<i32>,
	) -> Result<indexer::DenomHoldersResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_archiver.fetch_denom_holders(denom, limit)).await
	}

	// ---- indexer: trading ----

	pub async fn fetch_grid_strategies(
		&self,
		account_address: Option<&str>,
		market_id: Option<&str>,
		state: Option<&str>,
	) -> Result<indexer::GridStrategiesResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_trading.fetch_grid_strategies(
			account_address,
			market_id,
			state,
		))
		.await
	}

	// ---- indexer: web3 gateway ----

	pub async fn fetch_gas_price(&self) -> Result<indexer::GasPriceResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_web3gw.fetch_gas_price()).await
	}

	// ---- indexer: mito ----

	pub async fn fetch_mito_vault(
		&self,
		contract_address: &str,
	) -> Result<indexer::MitoVaultResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_vault(contract_address)).await
	}

	pub async fn fetch_mito_vaults(&self) -> Result<indexer::MitoVaultsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_vaults()).await
	}

	pub async fn fetch_mito_lp_token_price_chart(
		&self,
		vault_address: &str,
		from: Option<i64>,
		to: Option<i64>,
	) -> Result<indexer::MitoChartResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_mito
				.fetch_lp_token_price_chart(vault_address, from, to),
		)
		.await
	}

	pub async fn fetch_mito_tvl_chart(
		&self,
		vault_address: &str,
		from: Option<i64>,
		to: Option<i64>,
	) -> Result<indexer::MitoChartResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_tvl_chart(vault_address, from, to))
			.await
	}

	pub async fn fetch_mito_vaults_by_holder_address(
		&self,
		holder_address: &str,
	) -> Result<indexer::MitoLpHoldersResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_mito
				.fetch_vaults_by_holder_address(holder_address),
		)
		.await
	}

	pub async fn fetch_mito_lp_holders(
		&self,
		vault_address: &str,
	) -> Result<indexer::MitoLpHoldersResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_lp_holders(vault_address)).await
	}

	pub async fn fetch_mito_holder_portfolio(
		&self,
		holder_address: &str,
	) -> Result<indexer::MitoHolderPortfolioResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_holder_portfolio(holder_address)).await
	}

	pub async fn fetch_mito_leaderboard(
		&self,
		epoch_id: Option<i32>,
	) -> Result<indexer::MitoLeaderboardResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_leaderboard(epoch_id)).await
	}

	pub async fn fetch_mito_transfer_history(
		&self,
		vault: Option<&str>,
		account: Option<&str>,
	) -> Result<indexer::MitoTransfersResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_transfer_history(vault, account)).await
	}

	pub async fn fetch_mito_leaderboard_epochs(
		&self,
		limit: Option<i32>,
	) -> Result<indexer::MitoLeaderboardEpochsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_leaderboard_epochs(limit)).await
	}

	pub async fn fetch_mito_staking_pools(
		&self,
		staker: Option<&str>,
		staking_contract_address: Option<&str>,
	) -> Result<indexer::MitoStakingPoolsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_mito
				.fetch_staking_pools(staker, staking_contract_address),
		)
		.await
	}

	pub async fn fetch_mito_staking_history(
		&self,
		staker: Option<&str>,
	) -> Result<indexer::MitoStakingHistoryResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_staking_history(staker)).await
	}

	pub async fn fetch_mito_staking_rewards_by_account(
		&self,
		staker: &str,
	) -> Result<indexer::MitoStakingRewardsResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_mito
				.fetch_staking_rewards_by_account(staker),
		)
		.await
	}

	pub async fn fetch_mito_missions(
		&self,
		account_address: &str,
	) -> Result<indexer::MitoMissionsResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_missions(account_address)).await
	}

	pub async fn fetch_mito_mission_leaderboard(
		&self,
		user_address: Option<&str>,
	) -> Result<indexer::MitoMissionLeaderboardResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_mission_leaderboard(user_address))
			.await
	}

	pub async fn fetch_mito_ido(
		&self,
		contract_address: &str,
		account_address: Option<&str>,
	) -> Result<indexer::MitoIdoResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_mito
				.fetch_ido(contract_address, account_address),
		)
		.await
	}

	pub async fn fetch_mito_idos(
		&self,
		status: Option<&str>,
	) -> Result<indexer::MitoIdosResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_idos(status)).await
	}

	pub async fn fetch_mito_ido_subscribers(
		&self,
		contract_address: &str,
	) -> Result<indexer::MitoIdoSubscribersResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_ido_subscribers(contract_address))
			.await
	}

	pub async fn fetch_mito_ido_subscription(
		&self,
		contract_address: &str,
		account_address: &str,
	) -> Result<indexer::MitoIdoSubscriptionResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_mito
				.fetch_ido_subscription(contract_address, account_address),
		)
		.await
	}

	pub async fn fetch_mito_ido_activities(
		&self,
		contract_address: &str,
	) -> Result<indexer::MitoIdoActivitiesResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_ido_activities(contract_address))
			.await
	}

	pub async fn fetch_mito_ido_whitelist(
		&self,
		ido_address: &str,
	) -> Result<indexer::MitoIdoWhitelistResponse, NormalizedFault> {
		dispatcher::query(self.registry.indexer_mito.fetch_ido_whitelist(ido_address)).await
	}

	pub async fn fetch_mito_claim_references(
		&self,
		ido_address: &str,
		account_address: &str,
	) -> Result<indexer::MitoClaimReferencesResponse, NormalizedFault> {
		dispatcher::query(
			self.registry
				.indexer_mito
				.fetch_claim_references(ido_address, account_address),
		)
		.await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

	#[test]
	fn test_new_with_private_key() {
		let key = SecretString::new(TEST_KEY.to_string());
		let client = InjectiveClient::new(NetworkSelector::Testnet, Some(&key), None).unwrap();
		assert_eq!(
			client.identity().derived_address,
			"inj17w0adeg64ky0daxwd2ugyuneellmjgnxf5vkec"
		);
		assert_eq!(client.network(), NetworkSelector::Testnet);
	}

	#[test]
	fn test_new_with_address_only() {
		let client = InjectiveClient::new(
			NetworkSelector::Mainnet,
			None,
			Some("0x90F79bf6EB2c4f870365E785982E1f101E93b906"),
		)
		.unwrap();
		assert_eq!(
			client.identity().derived_address,
			"inj1jrmehaht938cwqm9u7zestslzq0f8wgx6xrcy0"
		);
	}

	#[test]
	fn test_new_without_identity_fails() {
		let err = InjectiveClient::new(NetworkSelector::Testnet, None, None).unwrap_err();
		assert!(err.to_string().contains("Failed to derive client identity"));
	}

	#[test]
	fn test_debug_output_shows_network_and_identity() {
		let key = SecretString::new(TEST_KEY.to_string());
		let client = InjectiveClient::new(NetworkSelector::Testnet, Some(&key), None).unwrap();
		let rendered = format!("{:?}", client);
		assert!(rendered.contains("Testnet"));
		assert!(rendered.contains("inj17w0adeg64ky0daxwd2ugyuneellmjgnxf5vkec"));
	}

	#[test]
	fn test_network_info_matches_resolver() {
		let key = SecretString::new(TEST_KEY.to_string());
		let client = InjectiveClient::new(NetworkSelector::Devnet, Some(&key), None).unwrap();
		let info = client.network_info();
		assert_eq!(info.network, NetworkSelector::Devnet);
		assert_eq!(info.endpoints, EndpointSet::resolve(NetworkSelector::Devnet));
	}
}
