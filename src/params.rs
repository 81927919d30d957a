//! Parameter extraction and validation for run records.
//!
//! A run addressed to the wait-for-merge task carries exactly two
//! parameters: the pull request number and the repository it lives in.
//! This module turns the run's declared parameters into a typed
//! [`RunParams`], or a [`ParamError`] whose message ends up verbatim in
//! the run's failure condition.

use thiserror::Error;

use crate::types::{PrNumber, RepoId, Run};

/// Name of the parameter carrying the pull request number.
pub const PR_NUMBER_PARAM: &str = "pr-number";

/// Name of the parameter carrying the `owner/repository` pair.
pub const REPOSITORY_PARAM: &str = "repository";

/// A parameter validation failure.
///
/// Required-field errors short-circuit before the unexpected-parameter
/// check: extra names are only reported once both recognized parameters
/// are present and syntactically valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("pr-number param is required")]
    PrNumberRequired,

    #[error("pr-number not a number: {0}")]
    PrNumberNotANumber(String),

    #[error("repository param is required")]
    RepositoryRequired,

    #[error("unexpected repository format: {0}")]
    RepositoryFormat(String),

    /// Extraneous parameter names, in declaration order.
    #[error("found unexpected params: [{}]", .0.join(" "))]
    UnexpectedParams(Vec<String>),
}

/// The validated form of a run's parameters.
///
/// Exists only for the duration of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    pub pr_number: PrNumber,
    pub repo: RepoId,
}

/// Parses and validates the run's declared parameters.
pub fn extract_params(run: &Run) -> Result<RunParams, ParamError> {
    let pr_value = match run.spec.param(PR_NUMBER_PARAM) {
        Some(p) if !p.value.is_empty() => p.value.as_str(),
        _ => return Err(ParamError::PrNumberRequired),
    };
    let pr_number = pr_value
        .parse::<u64>()
        .map(PrNumber)
        .map_err(|_| ParamError::PrNumberNotANumber(pr_value.to_string()))?;

    let repo_value = match run.spec.param(REPOSITORY_PARAM) {
        Some(p) if !p.value.is_empty() => p.value.as_str(),
        _ => return Err(ParamError::RepositoryRequired),
    };
    let repo = parse_repository(repo_value)?;

    let unexpected: Vec<String> = run
        .spec
        .params
        .iter()
        .filter(|p| p.name != PR_NUMBER_PARAM && p.name != REPOSITORY_PARAM)
        .map(|p| p.name.clone())
        .collect();
    if !unexpected.is_empty() {
        return Err(ParamError::UnexpectedParams(unexpected));
    }

    Ok(RunParams { pr_number, repo })
}

/// Splits an `owner/repository` string into its two segments.
fn parse_repository(value: &str) -> Result<RepoId, ParamError> {
    let mut segments = value.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Ok(RepoId::new(owner, repo))
        }
        _ => Err(ParamError::RepositoryFormat(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Param, RunSpec};

    fn run_with_params(params: Vec<Param>) -> Run {
        Run {
            spec: RunSpec {
                task_ref: None,
                params,
            },
            ..Run::default()
        }
    }

    fn valid_params() -> Vec<Param> {
        vec![
            Param::new(PR_NUMBER_PARAM, "1"),
            Param::new(REPOSITORY_PARAM, "owner/repo"),
        ]
    }

    #[test]
    fn valid_params_extract() {
        let run = run_with_params(valid_params());
        let params = extract_params(&run).unwrap();
        assert_eq!(params.pr_number, PrNumber(1));
        assert_eq!(params.repo, RepoId::new("owner", "repo"));
    }

    #[test]
    fn missing_pr_number_is_required_error() {
        let run = run_with_params(vec![Param::new(REPOSITORY_PARAM, "owner/repo")]);
        let err = extract_params(&run).unwrap_err();
        assert_eq!(err, ParamError::PrNumberRequired);
        assert_eq!(err.to_string(), "pr-number param is required");
    }

    #[test]
    fn empty_pr_number_is_required_error() {
        let run = run_with_params(vec![
            Param::new(PR_NUMBER_PARAM, ""),
            Param::new(REPOSITORY_PARAM, "owner/repo"),
        ]);
        assert_eq!(extract_params(&run).unwrap_err(), ParamError::PrNumberRequired);
    }

    #[test]
    fn non_numeric_pr_number_reports_raw_value() {
        let run = run_with_params(vec![
            Param::new(PR_NUMBER_PARAM, "one"),
            Param::new(REPOSITORY_PARAM, "owner/repo"),
        ]);
        let err = extract_params(&run).unwrap_err();
        assert_eq!(err.to_string(), "pr-number not a number: one");
    }

    #[test]
    fn missing_repository_is_required_error() {
        let run = run_with_params(vec![Param::new(PR_NUMBER_PARAM, "1")]);
        let err = extract_params(&run).unwrap_err();
        assert_eq!(err.to_string(), "repository param is required");
    }

    #[test]
    fn malformed_repository_reports_raw_value() {
        let run = run_with_params(vec![
            Param::new(PR_NUMBER_PARAM, "1"),
            Param::new(REPOSITORY_PARAM, "i-need-a-hyphen"),
        ]);
        let err = extract_params(&run).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected repository format: i-need-a-hyphen"
        );
    }

    #[test]
    fn repository_with_three_segments_is_malformed() {
        let run = run_with_params(vec![
            Param::new(PR_NUMBER_PARAM, "1"),
            Param::new(REPOSITORY_PARAM, "a/b/c"),
        ]);
        let err = extract_params(&run).unwrap_err();
        assert_eq!(err.to_string(), "unexpected repository format: a/b/c");
    }

    #[test]
    fn repository_with_empty_segment_is_malformed() {
        for value in ["/repo", "owner/", "/"] {
            let run = run_with_params(vec![
                Param::new(PR_NUMBER_PARAM, "1"),
                Param::new(REPOSITORY_PARAM, value),
            ]);
            let err = extract_params(&run).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("unexpected repository format: {}", value)
            );
        }
    }

    #[test]
    fn extra_param_is_reported() {
        let mut params = valid_params();
        params.push(Param::new("not-wanted", "anything"));
        let run = run_with_params(params);
        let err = extract_params(&run).unwrap_err();
        assert_eq!(err.to_string(), "found unexpected params: [not-wanted]");
    }

    #[test]
    fn extra_params_keep_declaration_order() {
        let run = run_with_params(vec![
            Param::new("zeta", "1"),
            Param::new(PR_NUMBER_PARAM, "1"),
            Param::new("alpha", "2"),
            Param::new(REPOSITORY_PARAM, "owner/repo"),
        ]);
        let err = extract_params(&run).unwrap_err();
        assert_eq!(err.to_string(), "found unexpected params: [zeta alpha]");
    }

    #[test]
    fn missing_pr_number_wins_over_extra_params() {
        let run = run_with_params(vec![
            Param::new(REPOSITORY_PARAM, "owner/repo"),
            Param::new("not-wanted", "anything"),
        ]);
        assert_eq!(extract_params(&run).unwrap_err(), ParamError::PrNumberRequired);
    }

    #[test]
    fn malformed_repository_wins_over_extra_params() {
        let run = run_with_params(vec![
            Param::new(PR_NUMBER_PARAM, "1"),
            Param::new(REPOSITORY_PARAM, "nope"),
            Param::new("not-wanted", "anything"),
        ]);
        assert_eq!(
            extract_params(&run).unwrap_err(),
            ParamError::RepositoryFormat("nope".to_string())
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_u64_parses(n: u64) {
                let run = run_with_params(vec![
                    Param::new(PR_NUMBER_PARAM, n.to_string()),
                    Param::new(REPOSITORY_PARAM, "owner/repo"),
                ]);
                prop_assert_eq!(extract_params(&run).unwrap().pr_number, PrNumber(n));
            }

            #[test]
            fn non_digit_values_never_parse(value in "[a-zA-Z-]{1,20}") {
                let run = run_with_params(vec![
                    Param::new(PR_NUMBER_PARAM, &value),
                    Param::new(REPOSITORY_PARAM, "owner/repo"),
                ]);
                prop_assert_eq!(
                    extract_params(&run).unwrap_err(),
                    ParamError::PrNumberNotANumber(value)
                );
            }

            #[test]
            fn two_nonempty_segments_always_parse(
                owner in "[a-zA-Z][a-zA-Z0-9-]{0,38}",
                repo in "[a-zA-Z][a-zA-Z0-9_-]{0,99}"
            ) {
                let run = run_with_params(vec![
                    Param::new(PR_NUMBER_PARAM, "1"),
                    Param::new(REPOSITORY_PARAM, format!("{}/{}", owner, repo)),
                ]);
                prop_assert_eq!(
                    extract_params(&run).unwrap().repo,
                    RepoId::new(owner, repo)
                );
            }
        }
    }
}
