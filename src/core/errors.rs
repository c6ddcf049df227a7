/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for verification
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Result type for scenario operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Invariant violations detected after a run
///
/// Both variants indicate a logic error in a strategy, never a transient fault.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum VerifyError {
    #[error("touched more than once: guarded action ran {touches} time(s), expected {expected}")]
    #[diagnostic(
        code(verify::double_execution),
        help("Two units both observed the action as unclaimed. Check that every precheck is followed by a synchronized re-check.")
    )]
    DoubleExecution { touches: usize, expected: usize },

    #[error("did not touch: guarded action never ran")]
    #[diagnostic(
        code(verify::non_execution),
        help("No unit won the claim although the run started unclaimed. Check the claim primitive was not pre-consumed.")
    )]
    NonExecution,
}

/// Scenario lifecycle errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ScenarioError {
    #[error("Invalid scenario configuration: {0}")]
    #[diagnostic(
        code(scenario::invalid_config),
        help("Concurrency must be between 1 and the configured maximum, and durations must parse as milliseconds.")
    )]
    InvalidConfig(String),

    #[error("Spawned {spawned} of {requested} units: {reason}")]
    #[diagnostic(
        code(scenario::spawn_failed),
        help("The OS refused another thread. Lower the concurrency or the unit stack size.")
    )]
    SpawnFailed {
        spawned: usize,
        requested: usize,
        reason: String,
    },

    #[error("{outstanding} unit(s) from the previous run are still running")]
    #[diagnostic(
        code(scenario::run_in_progress),
        help("Call wait() or verify() before starting another run or resetting.")
    )]
    RunInProgress { outstanding: usize },

    #[error("previous run was never reset ({touches} touch(es), {recorded} unit outcome(s) recorded)")]
    #[diagnostic(
        code(scenario::not_reset),
        help("Call reset() or verify_and_reset() before launching another run on the same scenario.")
    )]
    NotReset { touches: usize, recorded: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Verify(#[from] VerifyError),
}
