//! Secret management module for handling sensitive data securely.
//!
//! Carries the private key into client construction with automatic memory
//! zeroization. The key material is consumed during identity derivation and
//! never retained on the client.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string type that automatically zeroizes its contents when dropped.
///
/// This type ensures that sensitive data like private keys are securely
/// erased from memory as soon as they're no longer needed. It implements both
/// `Zeroize` and `ZeroizeOnDrop` to guarantee secure memory cleanup.
///
/// # Security
///
/// The underlying string is automatically zeroized when:
/// - The value is dropped
/// - `zeroize()` is called explicitly
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
	/// Creates a new `SecretString` with the given value.
	///
	/// The value will be automatically zeroized when the `SecretString` is dropped.
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Gets a reference to the underlying string.
	///
	/// # Security Note
	///
	/// Be careful with this method as it exposes the secret value.
	/// The reference should be used immediately and not stored.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl AsRef<str> for SecretString {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

// Secrets never render their contents in logs or panics.
impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecretString(<redacted>)")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<redacted>")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_as_str_exposes_value() {
		let secret = SecretString::new("super-secret".to_string());
		assert_eq!(secret.as_str(), "super-secret");
		assert_eq!(secret.as_ref(), "super-secret");
	}

	#[test]
	fn test_debug_and_display_are_redacted() {
		let secret = SecretString::from("super-secret");
		assert_eq!(format!("{:?}", secret), "SecretString(<redacted>)");
		assert_eq!(format!("{}", secret), "<redacted>");
	}

	#[test]
	fn test_zeroize_clears_value() {
		let mut secret = SecretString::from("super-secret");
		secret.zeroize();
		assert_eq!(secret.as_str(), "");
	}
}
