/*!
 * Exclusive-Lock Strategies
 */

use crate::core::errors::ScenarioResult;
use crate::scenario::state::GuardState;
use crate::scenario::{Scenario, SkipPoint, UnitOutcome};
use parking_lot::Mutex;

impl Scenario {
    /// Check-then-act entirely under one exclusive lock
    ///
    /// Correct by construction, but every unit contends for the lock even
    /// after the action is done.
    pub fn lock(&self) -> ScenarioResult<()> {
        let lock = Mutex::new(());
        self.launch("Lock", false, move |state| exclusive(state, &lock))
    }

    /// Unlocked precheck, then the `lock` protocol
    pub fn lock_precheck(&self) -> ScenarioResult<()> {
        let lock = Mutex::new(());
        self.launch("LockPrecheck", false, move |state| {
            if state.check() {
                return UnitOutcome::Skipped(SkipPoint::Precheck);
            }
            exclusive(state, &lock)
        })
    }
}

/// Re-check under the lock before acting
///
/// The re-check is mandatory after a precheck: another unit may have acted
/// between the precheck and the acquisition.
pub(crate) fn exclusive(state: &GuardState, lock: &Mutex<()>) -> UnitOutcome {
    let _guard = lock.lock();
    if state.check() {
        return UnitOutcome::Skipped(SkipPoint::ExclusiveCheck);
    }
    state.act();
    UnitOutcome::Done
}
