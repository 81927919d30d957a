//! Run records and their status lifecycle.
//!
//! A run is created by the control plane, handed to the reconciler by
//! reference for in-place status mutation, and becomes immutable once its
//! `Succeeded` condition reaches a terminal status. The reconciler is the
//! only writer; the host guarantees exclusive access for the duration of
//! one reconciliation pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The condition type tracking run completion.
///
/// A run's status holds at most one condition of this type; status
/// transitions replace it wholesale, never append.
pub const SUCCEEDED_CONDITION: &str = "Succeeded";

/// A reference identifying which task implementation handles a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub api_version: String,
    pub kind: String,

    /// Name of a sub-resource carrying the task definition. The
    /// wait-for-merge task is parameterized entirely through params, so
    /// this must be empty for runs addressed to it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl TaskRef {
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        TaskRef {
            api_version: api_version.into(),
            kind: kind.into(),
            name: String::new(),
        }
    }
}

/// A named string parameter declared on a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: String,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The declared intent of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSpec {
    /// Which task implementation should handle this run. Absent means the
    /// run is not addressed to any task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_ref: Option<TaskRef>,

    /// Ordered parameters, names unique.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

impl RunSpec {
    /// Returns the parameter with the given name, if declared.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// The status of a condition: `Unknown` while in progress, then `True` or
/// `False` once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    Unknown,
    True,
    False,
}

/// A single observed condition on a run's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: ConditionStatus,
    pub reason: String,
    pub message: String,
}

/// The observed state of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStatus {
    /// When work on the run began. Latched exactly once, from the first
    /// successfully fetched pull request's creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl RunStatus {
    /// Returns the `Succeeded` condition, if present.
    pub fn succeeded_condition(&self) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|c| c.condition_type == SUCCEEDED_CONDITION)
    }

    /// Replaces the `Succeeded` condition wholesale.
    fn set_succeeded_condition(
        &mut self,
        status: ConditionStatus,
        reason: &str,
        message: impl Into<String>,
    ) {
        self.conditions
            .retain(|c| c.condition_type != SUCCEEDED_CONDITION);
        self.conditions.push(Condition {
            condition_type: SUCCEEDED_CONDITION.to_string(),
            status,
            reason: reason.to_string(),
            message: message.into(),
        });
    }

    /// Marks the run as still in progress.
    pub fn mark_running(&mut self, reason: &str, message: impl Into<String>) {
        self.set_succeeded_condition(ConditionStatus::Unknown, reason, message);
    }

    /// Marks the run as succeeded (terminal).
    pub fn mark_succeeded(&mut self, reason: &str, message: impl Into<String>) {
        self.set_succeeded_condition(ConditionStatus::True, reason, message);
    }

    /// Marks the run as failed (terminal).
    pub fn mark_failed(&mut self, reason: &str, message: impl Into<String>) {
        self.set_succeeded_condition(ConditionStatus::False, reason, message);
    }
}

/// The lifecycle phase of a run, derived from its `Succeeded` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No condition yet, or in progress without a start time.
    Pending,

    /// In progress with a start time set.
    Running,

    /// Finished successfully (terminal).
    Succeeded,

    /// Finished unsuccessfully (terminal).
    Failed,
}

impl RunPhase {
    /// Returns true if the phase is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::Succeeded | RunPhase::Failed)
    }
}

/// A run record: the subject entity of reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub spec: RunSpec,

    #[serde(default)]
    pub status: RunStatus,
}

impl Run {
    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> RunPhase {
        match self.status.succeeded_condition().map(|c| c.status) {
            Some(ConditionStatus::True) => RunPhase::Succeeded,
            Some(ConditionStatus::False) => RunPhase::Failed,
            Some(ConditionStatus::Unknown) if self.status.start_time.is_some() => {
                RunPhase::Running
            }
            _ => RunPhase::Pending,
        }
    }

    /// Returns true if the run has reached a terminal phase.
    pub fn is_done(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Returns whether the run succeeded, or `None` if it is not yet done.
    pub fn is_successful(&self) -> Option<bool> {
        match self.phase() {
            RunPhase::Succeeded => Some(true),
            RunPhase::Failed => Some(false),
            _ => None,
        }
    }
}
