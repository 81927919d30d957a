//! The injected pull request lookup capability.

use std::fmt;
use std::future::Future;

use crate::types::{PrNumber, PrSnapshot, RepoId};

/// Fetches a point-in-time snapshot of a pull request.
///
/// The reconciler issues at most one fetch per pass, with coordinates
/// derived fresh from the run's parameters each time. Timeout and
/// cancellation are the caller's responsibility; a cancellation surfaced
/// through the error channel aborts the pass like any other fetch error.
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct FixedSource(PrSnapshot);
///
/// impl PullRequestSource for FixedSource {
///     type Error = String;
///
///     async fn fetch(&self, _: &RepoId, _: PrNumber) -> Result<PrSnapshot, String> {
///         Ok(self.0)
///     }
/// }
/// ```
pub trait PullRequestSource {
    /// The error type returned by this source.
    type Error: fmt::Display;

    /// Fetches the pull request `number` in `repo`.
    fn fetch(
        &self,
        repo: &RepoId,
        number: PrNumber,
    ) -> impl Future<Output = Result<PrSnapshot, Self::Error>> + Send;
}
