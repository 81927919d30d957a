//! Outbound notifications describing reconciliation outcomes.
//!
//! Notifications are for observability only: the host may surface them as
//! events or log lines, but correctness never depends on them.

use serde::{Deserialize, Serialize};

use crate::types::Run;

/// Reason attached to every reconciliation notification.
pub const RUN_RECONCILED_REASON: &str = "RunReconciled";

/// The severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Warning,
}

/// An outbound notification produced by a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub reason: String,
    pub message: String,
}

impl Notification {
    /// Creates a normal-severity notification.
    pub fn normal(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Normal,
            reason: reason.into(),
            message: message.into(),
        }
    }
}

/// Builds the notification emitted after a status-changing pass over a run.
pub fn run_reconciled(run: &Run) -> Notification {
    Notification::normal(
        RUN_RECONCILED_REASON,
        format!("Run reconciled: \"{}/{}\"", run.namespace, run.name),
    )
}
