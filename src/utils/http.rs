//! HTTP client construction for the gateway transports.
//!
//! One pooled, retrying client per resolved endpoint. The pool is sized for
//! a facade that fans out many small JSON calls to the same host, and the
//! retry policy only ever re-sends idempotent gateway requests.

use anyhow::Context;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
	policies::ExponentialBackoff, Jitter, RetryTransientMiddleware, RetryableStrategy,
};
use std::time::Duration;

// Gateway endpoints sit behind sentries that hold keep-alive connections
// open well past a request burst, so idle pool entries stay cheap.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const POOL_MAX_IDLE_PER_HOST: usize = 32;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);

/// Jitter applied to the retry backoff
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterSetting {
	/// No jitter applied to the backoff duration
	None,
	/// Full jitter applied, randomizing the backoff duration
	#[default]
	Full,
}

/// Retry policy for transient gateway failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
	/// Maximum number of retries for transient errors
	pub max_retries: u32,
	/// Base duration for exponential backoff calculations
	pub base_for_backoff: u32,
	/// Initial backoff duration before the first retry
	pub initial_backoff: Duration,
	/// Maximum backoff duration for retries
	pub max_backoff: Duration,
	/// Jitter to apply to the backoff duration
	pub jitter: JitterSetting,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_retries: 3,
			base_for_backoff: 2,
			initial_backoff: Duration::from_millis(250),
			max_backoff: Duration::from_secs(10),
			jitter: JitterSetting::Full,
		}
	}
}

/// Builds the pooled, retrying HTTP client a gateway transport runs on.
///
/// Construction performs no I/O. The strategy decides which responses count
/// as transient; the backoff schedule comes from `config`.
pub fn build_gateway_http_client<S>(
	config: &RetryConfig,
	strategy: S,
) -> Result<ClientWithMiddleware, anyhow::Error>
where
	S: RetryableStrategy + Send + Sync + 'static,
{
	let base_client = reqwest::ClientBuilder::new()
		.pool_idle_timeout(POOL_IDLE_TIMEOUT)
		.pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
		.timeout(REQUEST_TIMEOUT)
		.connect_timeout(CONNECT_TIMEOUT)
		.build()
		.context("Failed to create base HTTP client")?;

	let policy_builder = match config.jitter {
		JitterSetting::None => ExponentialBackoff::builder().jitter(Jitter::None),
		JitterSetting::Full => ExponentialBackoff::builder().jitter(Jitter::Full),
	};

	let retry_policy = policy_builder
		.base(config.base_for_backoff)
		.retry_bounds(config.initial_backoff, config.max_backoff)
		.build_with_max_retries(config.max_retries);

	Ok(ClientBuilder::new(base_client)
		.with(RetryTransientMiddleware::new_with_policy_and_strategy(
			retry_policy,
			strategy,
		))
		.build())
}

#[cfg(test)]
mod tests {
	use super::*;
	use reqwest_retry::default_on_request_failure;

	struct RetryNothing;

	impl RetryableStrategy for RetryNothing {
		fn handle(
			&self,
			res: &Result<reqwest::Response, reqwest_middleware::Error>,
		) -> Option<reqwest_retry::Retryable> {
			match res {
				Ok(_) => None,
				Err(e) => default_on_request_failure(e),
			}
		}
	}

	#[test]
	fn test_default_retry_config() {
		let config = RetryConfig::default();
		assert_eq!(config.max_retries, 3);
		assert_eq!(config.base_for_backoff, 2);
		assert_eq!(config.initial_backoff, Duration::from_millis(250));
		assert_eq!(config.max_backoff, Duration::from_secs(10));
		assert_eq!(config.jitter, JitterSetting::Full);
	}

	#[test]
	fn test_build_performs_no_io() {
		let client = build_gateway_http_client(&RetryConfig::default(), RetryNothing);
		assert!(client.is_ok());
	}
}
