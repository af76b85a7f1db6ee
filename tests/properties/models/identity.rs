use injective_client::models::{Identity, IdentityError, SecretString};
use proptest::{prelude::*, test_runner::Config};

fn key_hex(bytes: &[u8]) -> SecretString {
	SecretString::from(hex::encode(bytes))
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Same key in, same address pair out, every time.
	#[test]
	fn test_derivation_is_deterministic(bytes in proptest::array::uniform32(any::<u8>())) {
		let key = key_hex(&bytes);
		let first = Identity::derive(Some(&key), None);
		let second = Identity::derive(Some(&key), None);

		match (first, second) {
			(Ok(a), Ok(b)) => prop_assert_eq!(a, b),
			(Err(_), Err(_)) => {}
			_ => prop_assert!(false, "derivation outcome flipped between runs"),
		}
	}

	#[test]
	fn test_derived_addresses_are_well_formed(bytes in proptest::array::uniform32(1u8..)) {
		let key = key_hex(&bytes);
		if let Ok(identity) = Identity::derive(Some(&key), None) {
			prop_assert!(identity.source_address.starts_with("0x"));
			prop_assert_eq!(identity.source_address.len(), 42);
			prop_assert!(identity.derived_address.starts_with("inj1"));
		}
	}

	#[test]
	fn test_0x_prefix_is_equivalent(bytes in proptest::array::uniform32(1u8..)) {
		let plain = key_hex(&bytes);
		let prefixed = SecretString::from(format!("0x{}", hex::encode(bytes)));

		match (Identity::derive(Some(&plain), None), Identity::derive(Some(&prefixed), None)) {
			(Ok(a), Ok(b)) => prop_assert_eq!(a, b),
			(Err(_), Err(_)) => {}
			_ => prop_assert!(false, "prefix changed the derivation outcome"),
		}
	}

	// Keys that do not decode to exactly 32 bytes are always rejected. An
	// empty key reads as no key at all and fails for the missing identity,
	// not for the key length.
	#[test]
	fn test_wrong_length_keys_are_rejected(
		bytes in proptest::collection::vec(any::<u8>(), 0..64)
	) {
		prop_assume!(bytes.len() != 32);
		let key = key_hex(&bytes);
		let err = Identity::derive(Some(&key), None).unwrap_err();
		if bytes.is_empty() {
			prop_assert!(matches!(err, IdentityError::MissingIdentity(_)));
		} else {
			prop_assert!(matches!(err, IdentityError::InvalidKey(_)));
		}
	}

	#[test]
	fn test_non_hex_keys_are_rejected(key in "[g-z]{64}") {
		let secret = SecretString::from(key);
		let err = Identity::derive(Some(&secret), None).unwrap_err();
		prop_assert!(matches!(err, IdentityError::InvalidKey(_)));
	}

	// Explicit addresses derive the bech32 form from the account bytes only.
	#[test]
	fn test_address_derivation_is_deterministic(bytes in proptest::array::uniform20(any::<u8>())) {
		let address = format!("0x{}", hex::encode(bytes));
		let first = Identity::derive(None, Some(&address)).unwrap();
		let second = Identity::derive(None, Some(&address)).unwrap();

		prop_assert_eq!(&first, &second);
		prop_assert!(first.derived_address.starts_with("inj1"));
	}
}
