//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the library. Currently includes:
//!
//! - http: pooled, retrying HTTP client construction for the gateway transports
//! - logging: Logging utilities

pub mod http;
pub mod logging;

pub use http::*;
