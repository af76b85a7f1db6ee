//! Domain models and data structures for the client.
//!
//! This module contains all the core data structures used throughout the library:
//!
//! - `chain`: Typed payloads of the chain gateway modules (auth, bank, staking, ...)
//! - `config`: Network selection and endpoint resolution
//! - `core`: Wire primitives shared by every backend (coins, pagination)
//! - `identity`: The caller's address pair and its derivation
//! - `indexer`: Typed payloads of the off-chain indexer modules
//! - `security`: Security models (secrets)

pub mod chain;
mod config;
mod core;
mod identity;
pub mod indexer;
mod security;

// Re-export config types
pub use config::{ConfigError, EndpointSet, NetworkSelector};

// Re-export core types
pub use core::{Coin, PageRequest, PageResponse, Paging};

// Re-export identity types
pub use identity::{Identity, IdentityError};

// Re-export security types
pub use security::SecretString;
