//! Reconciliation of wait-for-merge runs against pull request state.
//!
//! The reconciler is a pure decision function over (run, pull request
//! snapshot): it mutates the run's status in place and returns an optional
//! notification. It performs no retries, holds no state across calls, and
//! never returns an error to its caller; every recognized failure resolves
//! into a terminal condition on the run.
//!
//! # Module Structure
//!
//! - [`source`]: the injected pull request lookup capability
//! - [`reason`]: condition reasons set by the reconciler

mod reconcile;
mod source;

pub use reconcile::Reconciler;
pub use source::PullRequestSource;

/// The `apiVersion` a run's task ref must carry to be handled here.
pub const API_VERSION: &str = "merge-gate.dev/v0";

/// The `kind` a run's task ref must carry to be handled here.
pub const KIND: &str = "PRMergeWait";

/// Condition reasons set by the reconciler.
pub mod reason {
    /// A disallowed sub-resource name was specified on the task ref.
    pub const UNEXPECTED_NAME: &str = "UnexpectedName";

    /// Parameter extraction failed.
    pub const UNEXPECTED_PARAMS: &str = "UnexpectedParams";

    /// The pull request fetch returned an error.
    pub const GITHUB_ERROR: &str = "GithubError";

    /// The pull request is still open.
    pub const WAITING: &str = "Waiting";

    /// The pull request was merged.
    pub const MERGED: &str = "Merged";

    /// The pull request was closed without merging.
    pub const NOT_MERGED: &str = "NotMerged";
}
