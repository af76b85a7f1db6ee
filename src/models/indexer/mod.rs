//! Indexer API payloads, grouped by indexer service.

mod account;
mod archiver;
mod auction;
mod derivatives;
mod explorer;
mod insurance;
mod mito;
mod oracle;
mod orderbook;
mod portfolio;
mod spot;
mod trading;
mod web3gw;

pub use account::*;
pub use archiver::*;
pub use auction::*;
pub use derivatives::*;
pub use explorer::*;
pub use insurance::*;
pub use mito::*;
pub use oracle::*;
pub use orderbook::*;
pub use portfolio::*;
pub use spot::*;
pub use trading::*;
pub use web3gw::*;
