/*!
 * Unit Outcomes
 *
 * Every unit terminates either `Done` (it ran the guarded action) or
 * `Skipped` at a specific point of its protocol. The tally counts both so a
 * run can be accounted for unit by unit.
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Where a unit gave up without acting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPoint {
    /// Unlocked fast-path check found the action done
    Precheck,
    /// Check under the shared (read) lock found the action done
    SharedCheck,
    /// Check under the exclusive lock found the action done
    ExclusiveCheck,
    /// Check while holding the channel token found the action done
    TokenCheck,
    /// The token channel could not be entered
    TokenUnavailable,
    /// Another unit won the atomic claim
    ClaimLost,
    /// The one-shot gate had already been fired by someone else
    GateSpent,
}

const SKIP_POINTS: usize = 7;

impl SkipPoint {
    pub const ALL: [SkipPoint; SKIP_POINTS] = [
        SkipPoint::Precheck,
        SkipPoint::SharedCheck,
        SkipPoint::ExclusiveCheck,
        SkipPoint::TokenCheck,
        SkipPoint::TokenUnavailable,
        SkipPoint::ClaimLost,
        SkipPoint::GateSpent,
    ];

    #[inline(always)]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Terminal state of one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitOutcome {
    Done,
    Skipped(SkipPoint),
}

/// Lock-free per-run outcome counters
///
/// # Performance
/// Cache-line aligned; every unit records exactly once, at exit
#[repr(C, align(64))]
#[derive(Debug, Default)]
pub(crate) struct OutcomeTally {
    done: AtomicUsize,
    skipped: [AtomicUsize; SKIP_POINTS],
}

impl OutcomeTally {
    #[inline(always)]
    pub(crate) fn record(&self, outcome: UnitOutcome) {
        match outcome {
            UnitOutcome::Done => self.done.fetch_add(1, Ordering::Relaxed),
            UnitOutcome::Skipped(point) => {
                self.skipped[point.index()].fetch_add(1, Ordering::Relaxed)
            }
        };
    }

    pub(crate) fn clear(&self) {
        self.done.store(0, Ordering::Relaxed);
        for counter in &self.skipped {
            counter.store(0, Ordering::Relaxed);
        }
    }

    pub(crate) fn snapshot(&self) -> OutcomeSnapshot {
        let at = |point: SkipPoint| self.skipped[point.index()].load(Ordering::Relaxed);
        OutcomeSnapshot {
            done: self.done.load(Ordering::Relaxed),
            precheck: at(SkipPoint::Precheck),
            shared_check: at(SkipPoint::SharedCheck),
            exclusive_check: at(SkipPoint::ExclusiveCheck),
            token_check: at(SkipPoint::TokenCheck),
            token_unavailable: at(SkipPoint::TokenUnavailable),
            claim_lost: at(SkipPoint::ClaimLost),
            gate_spent: at(SkipPoint::GateSpent),
        }
    }
}

/// Point-in-time copy of the outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSnapshot {
    pub done: usize,
    pub precheck: usize,
    pub shared_check: usize,
    pub exclusive_check: usize,
    pub token_check: usize,
    pub token_unavailable: usize,
    pub claim_lost: usize,
    pub gate_spent: usize,
}

impl OutcomeSnapshot {
    /// Units that skipped at `point`
    pub fn skipped_at(&self, point: SkipPoint) -> usize {
        match point {
            SkipPoint::Precheck => self.precheck,
            SkipPoint::SharedCheck => self.shared_check,
            SkipPoint::ExclusiveCheck => self.exclusive_check,
            SkipPoint::TokenCheck => self.token_check,
            SkipPoint::TokenUnavailable => self.token_unavailable,
            SkipPoint::ClaimLost => self.claim_lost,
            SkipPoint::GateSpent => self.gate_spent,
        }
    }

    /// Units that did not act
    pub fn skipped(&self) -> usize {
        SkipPoint::ALL.iter().map(|p| self.skipped_at(*p)).sum()
    }

    /// Units accounted for
    pub fn total(&self) -> usize {
        self.done + self.skipped()
    }
}
