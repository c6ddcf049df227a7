/*!
 * Already-Done Tests
 *
 * From a claimed start no strategy may run the action again.
 */

use super::common::{config, run_once, LEVELS};
use race_guard::{
    ClaimFlag, Expectation, OnceGate, Scenario, ScenarioConfig, Strategy, VerifyError,
};
use serial_test::serial;
use std::sync::Arc;

#[test]
#[serial]
fn test_no_strategy_touches_when_done() {
    for concurrency in LEVELS {
        for strategy in Strategy::catalog(true) {
            let verdict = run_once(config(concurrency), &strategy, true)
                .unwrap_or_else(|e| panic!("{} n={concurrency}: {e}", strategy.name()));

            assert_eq!(verdict.expectation, Expectation::Never);
            assert_eq!(verdict.touches, 0, "{}", strategy.name());
            assert!(verdict.completed);
        }
    }
}

#[test]
fn test_precheck_skips_everything_when_done() {
    for strategy in Strategy::catalog(true)
        .into_iter()
        .filter(Strategy::has_precheck)
    {
        let verdict = run_once(config(25), &strategy, true).unwrap();
        assert_eq!(verdict.outcomes.precheck, 25, "{}", strategy.name());
    }
}

#[test]
fn test_preclaimed_primitives_on_fresh_scenario() {
    let strategies = [
        Strategy::Once(Arc::new(OnceGate::spent())),
        Strategy::AtomicSwap(Arc::new(ClaimFlag::preclaimed())),
        Strategy::AtomicCas(Arc::new(ClaimFlag::preclaimed())),
    ];

    for strategy in strategies {
        let verdict = run_once(config(10), &strategy, false).unwrap();
        assert_eq!(verdict.expectation, Expectation::Never, "{}", strategy.name());
        assert_eq!(verdict.touches, 0);
        assert!(!verdict.completed);
    }
}

#[test]
fn test_fresh_flag_on_done_scenario_is_double_execution() {
    // The flag says unclaimed but the action already ran: one more touch is one too many
    let scenario = Scenario::new_done(ScenarioConfig::default()).unwrap();
    scenario.atomic_cas(Arc::new(ClaimFlag::new())).unwrap();

    assert_eq!(
        scenario.verify(),
        Err(VerifyError::DoubleExecution {
            touches: 1,
            expected: 0
        })
    );
}
