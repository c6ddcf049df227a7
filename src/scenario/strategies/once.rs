/*!
 * One-Shot-Gate Strategies
 */

use crate::core::errors::ScenarioResult;
use crate::core::sync::OnceGate;
use crate::scenario::state::GuardState;
use crate::scenario::{Scenario, SkipPoint, UnitOutcome};
use std::sync::Arc;

impl Scenario {
    /// Unlocked precheck, then `act` through a fresh one-shot gate
    pub fn once_precheck(&self) -> ScenarioResult<()> {
        let gate = OnceGate::new();
        self.launch("OncePrecheck", false, move |state| {
            if state.check() {
                return UnitOutcome::Skipped(SkipPoint::Precheck);
            }
            through_gate(state, &gate)
        })
    }

    /// `act` through a caller-supplied gate, with no precheck
    ///
    /// The gate may already be spent, in which case no unit acts.
    pub fn once(&self, gate: Arc<OnceGate>) -> ScenarioResult<()> {
        let spent = gate.is_spent();
        self.launch("Once", spent, move |state| through_gate(state, &gate))
    }
}

fn through_gate(state: &GuardState, gate: &OnceGate) -> UnitOutcome {
    if gate.fire(|| state.act()) {
        UnitOutcome::Done
    } else {
        UnitOutcome::Skipped(SkipPoint::GateSpent)
    }
}
