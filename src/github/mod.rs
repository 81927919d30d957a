//! GitHub-backed pull request source.
//!
//! This module wires the reconciler's [`PullRequestSource`] seam to the
//! real GitHub API via the octocrab library. Hosts construct a
//! [`GithubSource`] once (typically from [`GithubConfig::from_env`]) and
//! hand it to the reconciler.
//!
//! [`PullRequestSource`]: crate::reconciler::PullRequestSource

mod config;
mod source;

pub use config::GithubConfig;
pub use source::{GithubSource, SourceError};
