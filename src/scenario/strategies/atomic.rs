/*!
 * Atomic Strategies
 *
 * No lock at all: the swap or compare-and-swap on a `ClaimFlag` is the one
 * serialization point. The precheck variants read `completed`, not the flag,
 * so they can skip the atomic operation once the action is visibly done.
 */

use crate::core::errors::ScenarioResult;
use crate::core::sync::ClaimFlag;
use crate::scenario::state::GuardState;
use crate::scenario::{Scenario, SkipPoint, UnitOutcome};
use std::sync::Arc;
use tracing::trace;

impl Scenario {
    /// Swap the caller's flag to `true`; the unit that saw `false` acts
    pub fn atomic_swap(&self, flag: Arc<ClaimFlag>) -> ScenarioResult<()> {
        let claimed = flag.is_claimed();
        self.launch("AtomicSwap", claimed, move |state| {
            act_if_won(state, flag.swap_claim())
        })
    }

    /// Unlocked precheck, then swap on a run-local flag
    pub fn atomic_swap_precheck(&self) -> ScenarioResult<()> {
        let flag = ClaimFlag::new();
        self.launch("AtomicSwapPrecheck", false, move |state| {
            if state.check() {
                return UnitOutcome::Skipped(SkipPoint::Precheck);
            }
            act_if_won(state, flag.swap_claim())
        })
    }

    /// Compare-and-swap the caller's flag `false -> true`; the winner acts
    pub fn atomic_cas(&self, flag: Arc<ClaimFlag>) -> ScenarioResult<()> {
        let claimed = flag.is_claimed();
        self.launch("AtomicCAS", claimed, move |state| {
            act_if_won(state, flag.try_claim())
        })
    }

    /// Unlocked precheck, then compare-and-swap on a run-local flag
    pub fn atomic_cas_precheck(&self) -> ScenarioResult<()> {
        let flag = ClaimFlag::new();
        self.launch("AtomicCASPrecheck", false, move |state| {
            if state.check() {
                return UnitOutcome::Skipped(SkipPoint::Precheck);
            }
            act_if_won(state, flag.try_claim())
        })
    }
}

#[inline]
fn act_if_won(state: &GuardState, won: bool) -> UnitOutcome {
    if !won {
        return UnitOutcome::Skipped(SkipPoint::ClaimLost);
    }
    trace!("claim won");
    state.act();
    UnitOutcome::Done
}
