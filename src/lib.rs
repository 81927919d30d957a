//! Merge Gate - a wait-for-merge task for declarative run records.
//!
//! This library provides the reconciliation decision function that maps the
//! external lifecycle of a GitHub pull request onto the status of a run
//! record owned by an orchestration control plane. The host control loop
//! discovers runs and invokes [`reconciler::Reconciler::reconcile`]; the
//! library decides what status conditions the run should carry.

pub mod github;
pub mod notification;
pub mod params;
pub mod reconciler;
pub mod types;
