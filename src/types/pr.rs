//! Pull request snapshot types.
//!
//! A snapshot is a read-only, point-in-time view of a pull request obtained
//! from the configured source. It is consumed once per reconciliation pass
//! and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrState {
    /// The PR is open.
    Open,

    /// The PR was merged.
    Merged,

    /// The PR was closed without merging.
    Closed,
}

impl PrState {
    /// Returns true if the PR is open.
    pub fn is_open(&self) -> bool {
        matches!(self, PrState::Open)
    }

    /// Returns true if the PR was merged.
    pub fn is_merged(&self) -> bool {
        matches!(self, PrState::Merged)
    }
}

/// A point-in-time view of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrSnapshot {
    /// The current state of the PR.
    pub state: PrState,

    /// When the PR was created.
    pub created_at: DateTime<Utc>,
}

impl PrSnapshot {
    pub fn new(state: PrState, created_at: DateTime<Utc>) -> Self {
        PrSnapshot { state, created_at }
    }
}
