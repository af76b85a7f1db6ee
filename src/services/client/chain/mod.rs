//! Chain module clients, one per Cosmos/Injective chain module.
//!
//! Each client is pure wiring: it binds gateway paths for one module to the
//! shared transport handle and decodes the typed response. No client holds
//! state beyond its transport.

mod auction;
mod auth;
mod authz;
mod bank;
mod distribution;
mod exchange;
mod gov;
mod ibc;
mod insurance;
mod mint;
mod oracle;
mod peggy;
mod permissions;
mod rest;
mod staking;
mod tokenfactory;
mod wasm;
mod wasmx;

pub use auction::AuctionClient;
pub use auth::AuthClient;
pub use authz::AuthzClient;
pub use bank::BankClient;
pub use distribution::DistributionClient;
pub use exchange::ExchangeClient;
pub use gov::GovClient;
pub use ibc::IbcClient;
pub use insurance::InsuranceClient;
pub use mint::MintClient;
pub use oracle::OracleClient;
pub use peggy::PeggyClient;
pub use permissions::PermissionsClient;
pub use rest::{AuthRestClient, TendermintRestClient};
pub use staking::StakingClient;
pub use tokenfactory::TokenFactoryClient;
pub use wasm::WasmClient;
pub use wasmx::WasmxClient;
