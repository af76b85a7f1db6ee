//! Mock implementations for testing purposes.
//!
//! Contains a mock gateway transport, implemented with the `mockall` crate,
//! so registry and module client tests can run without an HTTP stack.

mod transports;

#[allow(unused_imports)]
pub use transports::*;
