//! Core domain types for runs and pull requests.

pub mod ids;
pub mod pr;
pub mod run;

pub use ids::{PrNumber, RepoId};
pub use pr::{PrSnapshot, PrState};
pub use run::{
    Condition, ConditionStatus, Param, Run, RunPhase, RunSpec, RunStatus, TaskRef,
    SUCCEEDED_CONDITION,
};
