//! Unified Injective client.
//!
//! The [`InjectiveClient`] facade resolves a network selector into a set
//! of gateway endpoints, derives the caller identity, and builds one
//! module client per chain, indexer, and REST API. Every read operation
//! funnels through the dispatcher, which maps transport failures into a
//! single [`NormalizedFault`] tagged with the phase that produced it.

pub mod chain;
mod dispatcher;
mod error;
mod facade;
pub mod indexer;
mod registry;
pub mod transports;

pub use error::{ErrorCode, NormalizedFault};
pub use facade::{InjectiveClient, NetworkInfo};
pub use registry::ModuleClientRegistry;
pub use transports::{GatewayTransport, HttpTransportClient, TransportError};
