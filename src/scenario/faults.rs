/*!
 * Fault Injection
 *
 * Deliberately broken protocols used to show the verifier catches real races.
 */

use super::{Scenario, SkipPoint, UnitOutcome};
use crate::core::errors::ScenarioResult;
use parking_lot::Mutex;

impl Scenario {
    /// `lock_precheck` without the re-check after taking the lock
    ///
    /// Every unit whose precheck ran before the first act will act.
    pub(crate) fn lock_precheck_without_recheck(&self) -> ScenarioResult<()> {
        let lock = Mutex::new(());
        self.launch("LockPrecheckNoRecheck", false, move |state| {
            if state.check() {
                return UnitOutcome::Skipped(SkipPoint::Precheck);
            }
            let _guard = lock.lock();
            state.act();
            UnitOutcome::Done
        })
    }

    /// Skips the claim entirely and never acts
    pub(crate) fn never_act(&self) -> ScenarioResult<()> {
        self.launch("NeverAct", false, |_| UnitOutcome::Skipped(SkipPoint::ClaimLost))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::errors::{ScenarioError, VerifyError};
    use crate::scenario::{Scenario, ScenarioConfig};
    use std::time::Duration;

    #[test]
    fn test_missing_recheck_detected_as_double_execution() {
        // Slow precheck lets every unit pass it before anyone acts
        let config = ScenarioConfig::default()
            .with_concurrency(64)
            .with_check_duration(Duration::from_millis(50))
            .with_act_duration(Duration::from_millis(1));
        let scenario = Scenario::new(config).unwrap();

        scenario.lock_precheck_without_recheck().unwrap();
        match scenario.verify() {
            Err(VerifyError::DoubleExecution { touches, expected }) => {
                assert!(touches > 1);
                assert_eq!(expected, 1);
            }
            other => panic!("expected double execution, got {other:?}"),
        }
    }

    #[test]
    fn test_correct_sibling_survives_same_pressure() {
        let config = ScenarioConfig::default()
            .with_concurrency(64)
            .with_check_duration(Duration::from_millis(50))
            .with_act_duration(Duration::from_millis(1));
        let scenario = Scenario::new(config).unwrap();

        scenario.lock_precheck().unwrap();
        let verdict = scenario.verify().unwrap();
        assert_eq!(verdict.touches, 1);
    }

    #[test]
    fn test_never_acting_detected_as_non_execution() {
        let scenario = Scenario::new(ScenarioConfig::default()).unwrap();
        scenario.never_act().unwrap();

        assert_eq!(scenario.verify(), Err(VerifyError::NonExecution));
        let err = scenario.verify_and_reset().unwrap_err();
        assert_eq!(err, ScenarioError::Verify(VerifyError::NonExecution));
        // A failed verification leaves the state untouched
        assert_eq!(scenario.outcomes().claim_lost, 10);
    }
}
