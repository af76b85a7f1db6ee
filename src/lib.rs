//! Unified client facade for the Injective chain and indexer APIs.
//!
//! This library composes the chain-level gateway modules (auth, bank, staking,
//! exchange, ...) and the off-chain indexer modules (spot, derivatives,
//! explorer, portfolio, ...) behind a single client object, hiding endpoint
//! resolution, address derivation and error normalization. It includes:
//!
//! - Network selection and deterministic endpoint resolution
//! - Identity derivation from a private key or an explicit address
//! - One low-level client per backend module, bound at construction
//! - A single dispatch chokepoint that normalizes every backend fault
//!
//! # Module Structure
//!
//! - `models`: Data structures for configuration, identity and wire payloads
//! - `services`: The client composition layer and module clients
//! - `utils`: Common utilities and helper functions

pub mod models;
pub mod services;
pub mod utils;
