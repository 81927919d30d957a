//! The status state machine for wait-for-merge runs.

use tracing::{debug, info};

use crate::notification::{self, Notification};
use crate::params::extract_params;
use crate::types::{PrState, Run};

use super::source::PullRequestSource;
use super::{reason, API_VERSION, KIND};

/// Decides what status conditions a run should carry, driven by the
/// current state of the pull request it references.
///
/// The source is injected so hosts can wire in the real GitHub client
/// while tests substitute a mock. One instance serves any number of runs;
/// it holds no per-run state.
pub struct Reconciler<S> {
    source: S,
}

impl<S: PullRequestSource> Reconciler<S> {
    pub fn new(source: S) -> Self {
        Reconciler { source }
    }

    /// Runs one reconciliation pass over `run`.
    ///
    /// Mutates the run's status in place and returns a notification for
    /// every status-changing transition. Returns `None` without touching
    /// the run when the run is not addressed to this task or is already
    /// terminal. Failures never propagate to the caller; they resolve
    /// into a `Failed` condition on the run.
    pub async fn reconcile(&self, run: &mut Run) -> Option<Notification> {
        let task_ref = run.spec.task_ref.as_ref()?;
        if task_ref.api_version != API_VERSION || task_ref.kind != KIND {
            // Not a run we should have been notified about.
            return None;
        }

        if !task_ref.name.is_empty() {
            let message = format!("Found unexpected ref name: {}", task_ref.name);
            run.status.mark_failed(reason::UNEXPECTED_NAME, message);
            return Some(notification::run_reconciled(run));
        }

        if run.is_done() {
            debug!(
                namespace = %run.namespace,
                name = %run.name,
                "run is finished, done reconciling"
            );
            return None;
        }

        let params = match extract_params(run) {
            Ok(params) => params,
            Err(err) => {
                run.status.mark_failed(reason::UNEXPECTED_PARAMS, err.to_string());
                return Some(notification::run_reconciled(run));
            }
        };

        let pr = match self.source.fetch(&params.repo, params.pr_number).await {
            Ok(pr) => pr,
            Err(err) => {
                run.status
                    .mark_failed(reason::GITHUB_ERROR, format!("Failed to get PR: {}", err));
                return Some(notification::run_reconciled(run));
            }
        };

        // Latch the start time on the first successful fetch; later passes
        // keep the original value even if the PR's createdAt changes upstream.
        if run.status.start_time.is_none() {
            run.status.start_time = Some(pr.created_at);
        }

        match pr.state {
            PrState::Open => {
                debug!(
                    repo = %params.repo,
                    pr = %params.pr_number,
                    "PR still open, waiting"
                );
                run.status
                    .mark_running(reason::WAITING, "Waiting for PR to be merged");
            }
            PrState::Merged => {
                info!(
                    repo = %params.repo,
                    pr = %params.pr_number,
                    "PR merged, run succeeded"
                );
                run.status.mark_succeeded(reason::MERGED, "PR was merged");
            }
            PrState::Closed => {
                info!(
                    repo = %params.repo,
                    pr = %params.pr_number,
                    "PR closed without merging, run failed"
                );
                run.status
                    .mark_failed(reason::NOT_MERGED, "PR was closed without merging");
            }
        }

        Some(notification::run_reconciled(run))
    }
}
