/*!
 * Exactly-Once Tests
 *
 * From an unclaimed start every strategy must run the action exactly once.
 */

use super::common::{config, run_once, trials_for, LEVELS};
use race_guard::{ClaimFlag, Expectation, Strategy};
use serial_test::serial;
use std::sync::Arc;

#[test]
#[serial]
fn test_every_strategy_touches_exactly_once() {
    for concurrency in LEVELS {
        for strategy in Strategy::catalog(false) {
            for trial in 0..trials_for(concurrency) {
                // External gates and flags are spent by a run
                let strategy = strategy.renewed(false);
                let verdict = run_once(config(concurrency), &strategy, false).unwrap_or_else(|e| {
                    panic!("{} n={concurrency} trial={trial}: {e}", strategy.name())
                });

                assert_eq!(verdict.expectation, Expectation::ExactlyOnce);
                assert_eq!(verdict.touches, 1, "{}", strategy.name());
                assert!(verdict.completed, "{}", strategy.name());
            }
        }
    }
}

#[test]
fn test_every_unit_accounted_for() {
    for strategy in Strategy::catalog(false) {
        let verdict = run_once(config(50), &strategy, false).unwrap();
        assert_eq!(verdict.outcomes.done, 1, "{}", strategy.name());
        assert_eq!(verdict.outcomes.total(), 50, "{}", strategy.name());
    }
}

#[test]
fn test_atomic_losers_report_claim_lost() {
    for strategy in [
        Strategy::AtomicSwap(Arc::new(ClaimFlag::new())),
        Strategy::AtomicCas(Arc::new(ClaimFlag::new())),
    ] {
        assert!(!strategy.has_precheck());
        let verdict = run_once(config(20), &strategy, false).unwrap();
        assert_eq!(verdict.outcomes.claim_lost, 19, "{}", strategy.name());
    }
}

#[test]
fn test_lock_losers_skip_under_lock() {
    let verdict = run_once(config(20), &Strategy::Lock, false).unwrap();
    assert_eq!(verdict.outcomes.exclusive_check, 19);
    assert_eq!(verdict.outcomes.precheck, 0);

    let verdict = run_once(config(20), &Strategy::Channel, false).unwrap();
    assert_eq!(verdict.outcomes.token_check, 19);
}
