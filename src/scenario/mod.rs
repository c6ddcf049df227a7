/*!
 * Scenario
 *
 * One guarded, non-idempotent action raced by N concurrent units.
 *
 * # Lifecycle
 *
 * 1. Build a `Scenario` (fresh, or already completed via `new_done`)
 * 2. Launch one strategy; it spawns `concurrency` units and returns
 * 3. `wait()` on the completion barrier
 * 4. `verify()` the touch-count invariant, `reset()` before reuse
 *
 * All shared state lives behind an `Arc` cloned into each unit, so separate
 * scenarios are fully isolated and may run concurrently.
 */

mod config;
#[cfg(test)]
mod faults;
mod outcome;
mod state;
mod strategies;
mod strategy;
mod verify;

pub use config::ScenarioConfig;
pub use outcome::{OutcomeSnapshot, SkipPoint, UnitOutcome};
pub use strategy::Strategy;
pub use verify::{judge, Expectation, Verdict};

use crate::core::errors::{ScenarioError, ScenarioResult};
use state::GuardState;
use std::sync::Arc;
use std::thread;
use tracing::{debug, trace, warn};

/// A guarded action plus the units racing to run it
#[derive(Debug, Clone)]
pub struct Scenario {
    state: Arc<GuardState>,
}

impl Scenario {
    /// Create a scenario whose action has not run yet
    pub fn new(config: ScenarioConfig) -> ScenarioResult<Self> {
        Self::with_completed(config, false)
    }

    /// Create a scenario whose action already ran
    pub fn new_done(config: ScenarioConfig) -> ScenarioResult<Self> {
        Self::with_completed(config, true)
    }

    fn with_completed(config: ScenarioConfig, completed: bool) -> ScenarioResult<Self> {
        config.validate()?;
        Ok(Self {
            state: Arc::new(GuardState::new(config, completed)),
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.state.config
    }

    /// Whether the guarded action has run
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// How many times the guarded action ran this run
    pub fn touch_count(&self) -> usize {
        self.state.touches()
    }

    /// Units of the current run that have not finished
    pub fn outstanding(&self) -> usize {
        self.state.barrier.outstanding()
    }

    /// Per-unit outcomes recorded so far this run
    pub fn outcomes(&self) -> OutcomeSnapshot {
        self.state.tally.snapshot()
    }

    /// Spawn `concurrency` units running `unit`, without waiting for them
    ///
    /// `externally_claimed` marks a run whose claim primitive (flag or gate)
    /// was consumed before any unit started. A scenario holding a finished
    /// run must be reset first.
    fn launch<F>(
        &self,
        strategy: &'static str,
        externally_claimed: bool,
        unit: F,
    ) -> ScenarioResult<()>
    where
        F: Fn(&GuardState) -> UnitOutcome + Send + Sync + 'static,
    {
        let outstanding = self.state.barrier.outstanding();
        if outstanding > 0 {
            return Err(ScenarioError::RunInProgress { outstanding });
        }

        // Leftovers from a finished run would skew this run's expectation
        let touches = self.state.touches();
        let recorded = self.state.tally.snapshot().total();
        if touches > 0 || recorded > 0 {
            return Err(ScenarioError::NotReset { touches, recorded });
        }

        self.state.begin_run(externally_claimed);

        let requested = self.state.config.concurrency;
        debug!(
            strategy,
            concurrency = requested,
            started_claimed = self.state.started_claimed(),
            "launching units"
        );

        let unit = Arc::new(unit);
        for spawned in 0..requested {
            let ticket = UnitTicket::register(Arc::clone(&self.state));
            let unit = Arc::clone(&unit);

            let result = thread::Builder::new()
                .stack_size(self.state.config.stack_size)
                .spawn(move || {
                    let outcome = (*unit)(ticket.state.as_ref());
                    trace!(strategy, ?outcome, "unit finished");
                    ticket.state.tally.record(outcome);
                });

            // A failed spawn drops the closure, and its ticket with it
            if let Err(err) = result {
                warn!(strategy, spawned, requested, error = %err, "unit spawn failed");
                return Err(ScenarioError::SpawnFailed {
                    spawned,
                    requested,
                    reason: err.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Barrier registration for one unit, released on drop
///
/// Dropping also covers a unit that panics or never starts.
struct UnitTicket {
    state: Arc<GuardState>,
}

impl UnitTicket {
    fn register(state: Arc<GuardState>) -> Self {
        state.barrier.add(1);
        Self { state }
    }
}

impl Drop for UnitTicket {
    fn drop(&mut self) {
        self.state.barrier.done();
    }
}
