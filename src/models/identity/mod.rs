//! Client identity derivation.
//!
//! Derives the address pair used to authenticate and address backend calls:
//! the EIP-55 checksummed Ethereum-style account address (source) and its
//! bech32 `inj` re-encoding (derived). The pair is computed once at client
//! construction, either from a secp256k1 private key or from an explicitly
//! supplied address. The raw key bytes are zeroized and never retained.

mod error;

pub use error::IdentityError;

use std::str::FromStr;

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use bech32::{Bech32, Hrp};
use zeroize::Zeroize;

use crate::models::security::SecretString;

/// The bech32 human readable part of Injective account addresses
const INJECTIVE_HRP: &str = "inj";

/// The address pair identifying the caller on both encodings the backends use.
///
/// Invariant: both addresses are present and structurally valid, or derivation
/// fails. There is no partially-initialized identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
	/// EIP-55 checksummed account address (`0x`-prefixed)
	pub source_address: String,
	/// bech32 `inj` encoding of the same account bytes
	pub derived_address: String,
}

impl Identity {
	/// Derives an identity from a private key or an explicit address.
	///
	/// Exactly one of the inputs must be usable; the private key takes
	/// precedence when both are supplied. The derived address is always
	/// computed from the source address, never the reverse.
	pub fn derive(
		private_key: Option<&SecretString>,
		address: Option<&str>,
	) -> Result<Self, IdentityError> {
		let account = if let Some(key) = private_key.filter(|k| !k.as_str().is_empty()) {
			address_from_private_key(key)?
		} else if let Some(addr) = address.filter(|a| !a.is_empty()) {
			Address::from_str(addr).map_err(|e| {
				IdentityError::invalid_address(
					"Address must be a 0x-prefixed 20-byte hex string",
					Some(Box::new(e)),
					None,
				)
			})?
		} else {
			return Err(IdentityError::missing_identity(
				"A private key or an explicit address is required",
				None,
				None,
			));
		};

		Ok(Self {
			source_address: account.to_checksum(None),
			derived_address: to_injective_address(&account),
		})
	}
}

/// Derives the account address from a hex-encoded secp256k1 private key.
///
/// Accepts an optional `0x` prefix. The decoded key must be exactly 32 bytes
/// and a valid curve scalar.
fn address_from_private_key(key: &SecretString) -> Result<Address, IdentityError> {
	let hex_part = key
		.as_str()
		.strip_prefix("0x")
		.unwrap_or_else(|| key.as_str());

	let mut bytes = hex::decode(hex_part).map_err(|e| {
		IdentityError::invalid_key("Private key is not valid hex", Some(Box::new(e)), None)
	})?;

	if bytes.len() != 32 {
		let error = IdentityError::invalid_key(
			format!(
				"Invalid private key length: decoded {} bytes, must be 32 bytes",
				bytes.len()
			),
			None,
			None,
		);
		bytes.zeroize();
		return Err(error);
	}

	let signer = PrivateKeySigner::from_slice(&bytes).map_err(|e| {
		IdentityError::invalid_key(
			"Private key is not a valid secp256k1 scalar",
			Some(Box::new(e)),
			None,
		)
	});
	bytes.zeroize();

	Ok(signer?.address())
}

/// Re-encodes the 20 account bytes as a bech32 `inj` address.
///
/// Pure cross-encoding with no failure path for a valid source address.
fn to_injective_address(address: &Address) -> String {
	let hrp = Hrp::parse(INJECTIVE_HRP).expect("static human readable part must parse");
	bech32::encode::<Bech32>(hrp, address.as_slice())
		.expect("20 account bytes always fit a bech32 payload")
}

#[cfg(test)]
mod tests {
	use super::*;

	// Address pair for a key whose derivation is independently known
	const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
	const KEY_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
	const KEY_INJ_ADDRESS: &str = "inj17w0adeg64ky0daxwd2ugyuneellmjgnxf5vkec";

	#[test]
	fn test_derive_from_private_key() {
		let key = SecretString::from(KEY);
		let identity = Identity::derive(Some(&key), None).unwrap();

		assert_eq!(identity.source_address, KEY_ADDRESS);
		assert_eq!(identity.derived_address, KEY_INJ_ADDRESS);
	}

	#[test]
	fn test_derive_accepts_0x_prefix() {
		let plain = SecretString::from(KEY);
		let prefixed = SecretString::from(format!("0x{}", KEY));

		assert_eq!(
			Identity::derive(Some(&plain), None).unwrap(),
			Identity::derive(Some(&prefixed), None).unwrap()
		);
	}

	#[test]
	fn test_derive_is_deterministic() {
		let key = SecretString::from(KEY);
		let first = Identity::derive(Some(&key), None).unwrap();
		let second = Identity::derive(Some(&key), None).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_derive_rejects_short_key() {
		let key = SecretString::from("abcdef");
		let err = Identity::derive(Some(&key), None).unwrap_err();
		assert!(matches!(err, IdentityError::InvalidKey(_)));
		assert!(err.to_string().contains("3 bytes"));
	}

	#[test]
	fn test_derive_rejects_long_key() {
		let key = SecretString::from(format!("{}00", KEY));
		let err = Identity::derive(Some(&key), None).unwrap_err();
		assert!(matches!(err, IdentityError::InvalidKey(_)));
	}

	#[test]
	fn test_derive_rejects_non_hex_key() {
		let key = SecretString::from("0xzz".to_string() + &"00".repeat(31));
		let err = Identity::derive(Some(&key), None).unwrap_err();
		assert!(matches!(err, IdentityError::InvalidKey(_)));
	}

	#[test]
	fn test_derive_rejects_zero_key() {
		// 32 zero bytes decode fine but are not a valid curve scalar
		let key = SecretString::from("0x".to_string() + &"00".repeat(32));
		let err = Identity::derive(Some(&key), None).unwrap_err();
		assert!(matches!(err, IdentityError::InvalidKey(_)));
	}

	#[test]
	fn test_derive_from_explicit_address() {
		let identity =
			Identity::derive(None, Some("0x90F79bf6EB2c4f870365E785982E1f101E93b906")).unwrap();
		assert_eq!(
			identity.source_address,
			"0x90F79bf6EB2c4f870365E785982E1f101E93b906"
		);
		assert_eq!(
			identity.derived_address,
			"inj1jrmehaht938cwqm9u7zestslzq0f8wgx6xrcy0"
		);
	}

	#[test]
	fn test_derive_checksums_lowercase_address() {
		let identity =
			Identity::derive(None, Some("0x90f79bf6eb2c4f870365e785982e1f101e93b906")).unwrap();
		assert_eq!(
			identity.source_address,
			"0x90F79bf6EB2c4f870365E785982E1f101E93b906"
		);
	}

	#[test]
	fn test_derive_rejects_malformed_address() {
		for bad in ["0x1234", "not-an-address", "90F79bf6EB2c4f870365E785982E1f101E93b9"] {
			let err = Identity::derive(None, Some(bad)).unwrap_err();
			assert!(matches!(err, IdentityError::InvalidAddress(_)), "{}", bad);
		}
	}

	#[test]
	fn test_derive_requires_some_input() {
		let err = Identity::derive(None, None).unwrap_err();
		assert!(matches!(err, IdentityError::MissingIdentity(_)));

		let empty = SecretString::from("");
		let err = Identity::derive(Some(&empty), Some("")).unwrap_err();
		assert!(matches!(err, IdentityError::MissingIdentity(_)));
	}

	#[test]
	fn test_private_key_takes_precedence() {
		let key = SecretString::from(KEY);
		let identity = Identity::derive(
			Some(&key),
			Some("0x90F79bf6EB2c4f870365E785982E1f101E93b906"),
		)
		.unwrap();
		assert_eq!(identity.source_address, KEY_ADDRESS);
	}
}
