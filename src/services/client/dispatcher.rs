//! Dispatch chokepoint for every facade operation.
//!
//! Each facade call funnels its bound module-client future through `query`
//! or `request`. The two entry points are behaviorally identical; the name
//! only tags intent for callers and log readers. Keeping the funnel single
//! means error-handling policy changes in one place, not per operation.

use std::future::Future;

use crate::services::client::{error::NormalizedFault, transports::TransportError};

/// Drives a read-path backend call, normalizing any fault.
pub(crate) async fn query<T, F>(call: F) -> Result<T, NormalizedFault>
where
	F: Future<Output = Result<T, TransportError>>,
{
	dispatch("query", call).await
}

/// Drives a write-path backend call, normalizing any fault.
pub(crate) async fn request<T, F>(call: F) -> Result<T, NormalizedFault>
where
	F: Future<Output = Result<T, TransportError>>,
{
	dispatch("request", call).await
}

async fn dispatch<T, F>(operation: &'static str, call: F) -> Result<T, NormalizedFault>
where
	F: Future<Output = Result<T, TransportError>>,
{
	// Success passes through untouched; a fault is wrapped exactly once.
	call.await
		.map_err(|e| NormalizedFault::new(operation, Some(Box::new(e)), None))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::services::client::error::ErrorCode;

	async fn succeeding() -> Result<u64, TransportError> {
		Ok(42)
	}

	async fn failing() -> Result<u64, TransportError> {
		Err(TransportError::network("connection refused", None, None))
	}

	#[tokio::test]
	async fn test_query_passes_success_through() {
		let result = query(succeeding()).await;
		assert_eq!(result.unwrap(), 42);
	}

	#[tokio::test]
	async fn test_query_normalizes_fault() {
		let fault = query(failing()).await.unwrap_err();
		assert_eq!(fault.operation, "query");
		assert_eq!(fault.code, ErrorCode::Unspecified);
		assert!(fault.to_string().starts_with("query failed"));
	}

	#[tokio::test]
	async fn test_request_tags_its_own_operation() {
		let fault = request(failing()).await.unwrap_err();
		assert_eq!(fault.operation, "request");
	}

	#[tokio::test]
	async fn test_fault_wrapped_exactly_once() {
		let fault = query(failing()).await.unwrap_err();

		// The direct source is the transport error, not another fault.
		let source = fault.context.source.as_ref().unwrap();
		assert!(source.downcast_ref::<TransportError>().is_some());
		assert!(source.downcast_ref::<NormalizedFault>().is_none());
	}
}
