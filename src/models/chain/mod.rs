//! Typed payloads of the chain gateway modules.
//!
//! One submodule per chain module, mirroring the backend's JSON gateway
//! schemas. Responses are explicit structures so malformed backend payloads
//! fail at the transport boundary instead of propagating untyped data.

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
mod staking;
mod tendermint;
mod tokenfactory;
mod wasm;
mod wasmx;

pub use auction::*;
pub use auth::*;
pub use authz::*;
pub use bank::*;
pub use distribution::*;
pub use exchange::*;
pub use gov::*;
pub use ibc::*;
pub use insurance::*;
pub use mint::*;
pub use oracle::*;
pub use peggy::*;
pub use permissions::*;
pub use staking::*;
pub use tendermint::*;
pub use tokenfactory::*;
pub use wasm::*;
pub use wasmx::*;
