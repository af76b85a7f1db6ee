//! Integration tests for the Injective client.
//!
//! Exercises the client facade and module clients against a local mock
//! gateway, plus mock transport implementations for registry-level tests.

mod integration {
	mod client {
		mod facade;
		mod faults;
		mod health;
		mod registry;
		mod transports;
	}
	mod mocks;
}
