/*!
 * Guard State
 *
 * The shared entity a run races over: whether the guarded action has
 * completed and how many times it actually executed.
 */

use super::config::ScenarioConfig;
use super::outcome::OutcomeTally;
use crate::core::sync::WaitGroup;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

/// Per-run shared state
///
/// `completed` is atomic so unlocked prechecks are well-defined reads.
/// They may still be stale; only the strategy's primitive makes a claim
/// decision sound.
#[derive(Debug)]
pub(crate) struct GuardState {
    pub(crate) config: ScenarioConfig,
    completed: AtomicBool,
    touches: AtomicUsize,
    /// Set at run start: the action was already claimed before any unit ran
    started_claimed: AtomicBool,
    pub(crate) barrier: WaitGroup,
    pub(crate) tally: OutcomeTally,
}

impl GuardState {
    pub(crate) fn new(config: ScenarioConfig, completed: bool) -> Self {
        Self {
            config,
            completed: AtomicBool::new(completed),
            touches: AtomicUsize::new(0),
            started_claimed: AtomicBool::new(completed),
            barrier: WaitGroup::new(),
            tally: OutcomeTally::default(),
        }
    }

    /// Observe completion after the simulated check latency
    ///
    /// Never mutates state.
    #[inline]
    pub(crate) fn check(&self) -> bool {
        if !self.config.check_duration.is_zero() {
            thread::sleep(self.config.check_duration);
        }
        self.completed.load(Ordering::Acquire)
    }

    /// The guarded, non-idempotent action
    ///
    /// Callers must guarantee at most one invocation per run.
    pub(crate) fn act(&self) {
        if !self.config.act_duration.is_zero() {
            thread::sleep(self.config.act_duration);
        }
        self.completed.store(true, Ordering::Release);
        self.touches.fetch_add(1, Ordering::AcqRel);
    }

    #[inline]
    pub(crate) fn is_completed(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }

    #[inline]
    pub(crate) fn touches(&self) -> usize {
        self.touches.load(Ordering::Acquire)
    }

    #[inline]
    pub(crate) fn started_claimed(&self) -> bool {
        self.started_claimed.load(Ordering::Acquire)
    }

    /// Snapshot the starting condition of a new run
    pub(crate) fn begin_run(&self, externally_claimed: bool) {
        let claimed = externally_claimed || self.is_completed();
        self.started_claimed.store(claimed, Ordering::Release);
        self.tally.clear();
    }

    /// Return to the unclaimed, untouched state
    pub(crate) fn clear(&self) {
        self.completed.store(false, Ordering::Release);
        self.touches.store(0, Ordering::Release);
        self.started_claimed.store(false, Ordering::Release);
        self.tally.clear();
    }
}
