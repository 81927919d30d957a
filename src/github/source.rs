//! Octocrab client wrapper implementing the pull request source seam.

use octocrab::Octocrab;
use thiserror::Error;

use crate::reconciler::PullRequestSource;
use crate::types::{PrNumber, PrSnapshot, PrState, RepoId};

/// An error from the GitHub-backed source.
///
/// The reconciler does not distinguish transient from permanent failures;
/// whatever this renders to ends up in the run's failure condition.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Api(#[from] octocrab::Error),

    /// The API returned a PR without a creation time.
    #[error("PR {pr} has no creation time")]
    MissingCreatedAt { pr: PrNumber },
}

/// A [`PullRequestSource`] backed by the GitHub REST API.
#[derive(Clone)]
pub struct GithubSource {
    client: Octocrab,
}

impl GithubSource {
    /// Creates a source from a pre-configured octocrab instance.
    ///
    /// Use this when you need custom authentication (e.g., GitHub App
    /// installation tokens).
    pub fn new(client: Octocrab) -> Self {
        GithubSource { client }
    }

    /// Creates a source authenticated with a personal access token.
    pub fn from_token(token: impl Into<String>) -> Result<Self, octocrab::Error> {
        let client = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(GithubSource::new(client))
    }
}

impl std::fmt::Debug for GithubSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubSource").finish_non_exhaustive()
    }
}

impl PullRequestSource for GithubSource {
    type Error = SourceError;

    async fn fetch(&self, repo: &RepoId, number: PrNumber) -> Result<PrSnapshot, SourceError> {
        let pull = self
            .client
            .pulls(repo.owner.as_str(), repo.repo.as_str())
            .get(number.0)
            .await?;

        let state = snapshot_state(
            pull.merged_at.is_some(),
            pull.state == Some(octocrab::models::IssueState::Closed),
        );
        let created_at = pull
            .created_at
            .ok_or(SourceError::MissingCreatedAt { pr: number })?;

        Ok(PrSnapshot::new(state, created_at))
    }
}

/// Collapses GitHub's (merged, closed) flags into a [`PrState`].
///
/// A merged PR also reports itself as closed; merged wins.
fn snapshot_state(merged: bool, closed: bool) -> PrState {
    if merged {
        PrState::Merged
    } else if closed {
        PrState::Closed
    } else {
        PrState::Open
    }
}
