/*!
 * Shared/Exclusive-Lock Strategies
 *
 * Observers share a read lock; only units that still see the action pending
 * escalate to the write lock.
 */

use crate::core::errors::ScenarioResult;
use crate::scenario::state::GuardState;
use crate::scenario::{Scenario, SkipPoint, UnitOutcome};
use parking_lot::RwLock;

impl Scenario {
    /// Shared-lock check, then exclusive-lock re-check and act
    pub fn rw_lock(&self) -> ScenarioResult<()> {
        let lock = RwLock::new(());
        self.launch("RWLock", false, move |state| shared_then_exclusive(state, &lock))
    }

    /// Unlocked, shared, then exclusive check before acting
    ///
    /// Once the action is done no lock of any kind is taken again.
    pub fn rw_lock_precheck(&self) -> ScenarioResult<()> {
        let lock = RwLock::new(());
        self.launch("RWLockPreCheck", false, move |state| {
            if state.check() {
                return UnitOutcome::Skipped(SkipPoint::Precheck);
            }
            shared_then_exclusive(state, &lock)
        })
    }
}

fn shared_then_exclusive(state: &GuardState, lock: &RwLock<()>) -> UnitOutcome {
    {
        let _shared = lock.read();
        if state.check() {
            return UnitOutcome::Skipped(SkipPoint::SharedCheck);
        }
    }

    // No lock held here; someone else may act before we get the write lock
    let _exclusive = lock.write();
    if state.check() {
        return UnitOutcome::Skipped(SkipPoint::ExclusiveCheck);
    }
    state.act();
    UnitOutcome::Done
}
