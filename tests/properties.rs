//! Property-based tests for the Injective client.
//!
//! Covers identity derivation and network endpoint resolution, the two
//! pure computations everything else is built on.

mod properties {
	mod models {
		mod config;
		mod identity;
	}
}
