//! Web3 gateway payloads.

use serde::{Deserialize, Serialize};

/// Suggested gas price in wei, as a decimal string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasPriceResponse {
	#[serde(default)]
	pub gas_price: String,
}
