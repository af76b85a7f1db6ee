//! Security models
//!
//! This module contains the security models for the library.
//!
//! - `secret`: Secret management and zeroization

mod secret;

pub use secret::SecretString;
