//! Indexer module clients, one per indexer API service.

mod account;
mod archiver;
mod auction;
mod derivatives;
mod explorer;
mod insurance;
mod mito;
mod oracle;
mod portfolio;
mod spot;
mod trading;
mod web3gw;

pub use account::IndexerAccountClient;
pub use archiver::ArchiverClient;
pub use auction::IndexerAuctionClient;
pub use derivatives::{DerivativeOrderFilter, DerivativesClient};
pub use explorer::ExplorerClient;
pub use insurance::IndexerInsuranceClient;
pub use mito::MitoClient;
pub use oracle::IndexerOracleClient;
pub use portfolio::PortfolioClient;
pub use spot::{SpotClient, SpotOrderFilter};
pub use trading::TradingClient;
pub use web3gw::Web3GatewayClient;
