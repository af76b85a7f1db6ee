//! Service layer for the Injective client.
//!
//! Contains the transport, module client, and facade implementations
//! that back every network-facing operation of the crate.

pub mod client;
