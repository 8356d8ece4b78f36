//! Write-through synchronization: mutate, then re-read.
//!
//! Pages never patch displayed state from a mutation's response. After a successful mutation
//! the owning collection is fetched again and replaces local state wholesale, so server-computed
//! fields (progress, review status, sort order) never drift.

use std::future::Future;

use crate::api::error::ApiError;

/// Run `mutation`, then `refetch` if it succeeded.
///
/// `refetch` is only polled after `mutation` resolves with `Ok`, so building it up front does
/// not issue a request.
///
/// # Returns
/// - `Ok(T)` - The freshly read collection
/// - `Err(ApiError)` - The mutation failed (the refetch was not sent), or the refetch failed
pub async fn write_through<T, M, R>(mutation: M, refetch: R) -> Result<T, ApiError>
where
    M: Future<Output = Result<(), ApiError>>,
    R: Future<Output = Result<T, ApiError>>,
{
    mutation.await?;

    refetch.await
}
