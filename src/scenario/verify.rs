/*!
 * Verifier
 *
 * Post-run invariant check. A run that started unclaimed must touch the
 * guarded action exactly once; a run that started claimed must not touch it.
 */

use super::outcome::OutcomeSnapshot;
use super::Scenario;
use crate::core::errors::{ScenarioError, ScenarioResult, VerifyError, VerifyResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Expected number of executions, fixed by the run's starting condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Started unclaimed: exactly one unit must act
    ExactlyOnce,
    /// Started claimed: no unit may act
    Never,
}

impl Expectation {
    pub const fn from_start(started_claimed: bool) -> Self {
        if started_claimed {
            Expectation::Never
        } else {
            Expectation::ExactlyOnce
        }
    }

    pub const fn expected_touches(self) -> usize {
        match self {
            Expectation::ExactlyOnce => 1,
            Expectation::Never => 0,
        }
    }
}

/// Compare an observed touch count against the expectation
pub fn judge(expectation: Expectation, touches: usize) -> VerifyResult<()> {
    let expected = expectation.expected_touches();
    if touches > expected {
        Err(VerifyError::DoubleExecution { touches, expected })
    } else if touches < expected {
        Err(VerifyError::NonExecution)
    } else {
        Ok(())
    }
}

/// Successful verification of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub expectation: Expectation,
    pub touches: usize,
    pub completed: bool,
    pub outcomes: OutcomeSnapshot,
}

impl Scenario {
    /// Block until every unit of the current run has finished
    pub fn wait(&self) {
        self.state.barrier.wait();
    }

    /// Like `wait`, giving up after `timeout`
    ///
    /// Returns `true` if every unit finished.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        self.state.barrier.wait_timeout(timeout)
    }

    /// Wait for the run, then check the touch-count invariant
    pub fn verify(&self) -> VerifyResult<Verdict> {
        self.wait();

        let expectation = Expectation::from_start(self.state.started_claimed());
        let touches = self.state.touches();
        let outcomes = self.state.tally.snapshot();

        if let Err(err) = judge(expectation, touches) {
            error!(%err, touches, ?expectation, ?outcomes, "invariant violated");
            return Err(err);
        }

        debug!(
            touches,
            ?expectation,
            done = outcomes.done,
            skipped = outcomes.skipped(),
            "run verified"
        );
        Ok(Verdict {
            expectation,
            touches,
            completed: self.state.is_completed(),
            outcomes,
        })
    }

    /// Clear `completed` and the touch count for reuse
    ///
    /// # Precondition
    ///
    /// The barrier has drained. Resetting while units run is rejected with
    /// `RunInProgress`.
    pub fn reset(&self) -> ScenarioResult<()> {
        let outstanding = self.state.barrier.outstanding();
        if outstanding > 0 {
            return Err(ScenarioError::RunInProgress { outstanding });
        }
        self.state.clear();
        Ok(())
    }

    /// `verify` followed by `reset`
    ///
    /// A caller-supplied gate or flag stays consumed; pass a fresh one to the
    /// next run.
    pub fn verify_and_reset(&self) -> ScenarioResult<Verdict> {
        let verdict = self.verify()?;
        self.reset()?;
        Ok(verdict)
    }
}
