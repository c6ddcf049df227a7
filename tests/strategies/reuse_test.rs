/*!
 * Reset-and-Reuse Tests
 */

use super::common::config;
use pretty_assertions::assert_eq;
use race_guard::{
    Expectation, OnceGate, Scenario, ScenarioConfig, ScenarioError, Strategy,
};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_second_run_matches_fresh_run() {
    for strategy in Strategy::catalog(false) {
        let scenario = Scenario::new(config(40)).unwrap();

        scenario.run(&strategy).unwrap();
        let first = scenario.verify_and_reset().unwrap();
        assert!(!scenario.is_completed());
        assert_eq!(scenario.touch_count(), 0);

        scenario.run(&strategy.renewed(false)).unwrap();
        let second = scenario.verify_and_reset().unwrap();

        assert_eq!(first.expectation, second.expectation, "{}", strategy.name());
        assert_eq!(first.touches, second.touches, "{}", strategy.name());
        assert_eq!(first.outcomes.done, second.outcomes.done);
    }
}

#[test]
fn test_reusing_spent_gate_expects_no_touch() {
    let gate = Arc::new(OnceGate::new());
    let scenario = Scenario::new(config(10)).unwrap();

    scenario.once(gate.clone()).unwrap();
    assert_eq!(scenario.verify_and_reset().unwrap().touches, 1);

    // Same gate again: it is already spent, so the run starts claimed
    scenario.once(gate).unwrap();
    let verdict = scenario.verify().unwrap();
    assert_eq!(verdict.expectation, Expectation::Never);
    assert_eq!(verdict.touches, 0);
    assert_eq!(verdict.outcomes.gate_spent, 10);
}

#[test]
fn test_reset_while_running_is_rejected() {
    let config = ScenarioConfig::default()
        .with_concurrency(2)
        .with_act_duration(Duration::from_millis(200));
    let scenario = Scenario::new(config).unwrap();

    scenario.lock().unwrap();
    assert!(matches!(
        scenario.reset(),
        Err(ScenarioError::RunInProgress { .. })
    ));

    scenario.wait();
    assert!(scenario.reset().is_ok());
}

#[test]
fn test_launch_without_reset_is_rejected() {
    let scenario = Scenario::new(config(10)).unwrap();
    scenario.lock().unwrap();
    assert_eq!(scenario.verify().unwrap().touches, 1);

    // The finished run is still on record; nothing may be blamed on the strategy
    assert_eq!(
        scenario.lock(),
        Err(ScenarioError::NotReset {
            touches: 1,
            recorded: 10
        })
    );
    assert_eq!(scenario.touch_count(), 1);
    assert_eq!(scenario.outcomes().total(), 10);

    scenario.reset().unwrap();
    scenario.lock().unwrap();
    assert_eq!(scenario.verify().unwrap().touches, 1);
}

#[test]
fn test_done_run_also_needs_reset() {
    let scenario = Scenario::new_done(config(5)).unwrap();
    scenario.channel().unwrap();
    assert_eq!(scenario.verify().unwrap().touches, 0);

    assert!(matches!(
        scenario.channel(),
        Err(ScenarioError::NotReset {
            touches: 0,
            recorded: 5
        })
    ));
}

#[test]
fn test_unlaunched_done_scenario_verifies() {
    let verdict = Scenario::new_done(config(5)).unwrap().verify().unwrap();
    assert_eq!(verdict.expectation, Expectation::Never);
    assert_eq!(verdict.touches, 0);
    assert!(verdict.completed);
}

#[test]
fn test_separate_scenarios_run_concurrently() {
    let scenarios: Vec<_> = (0..4)
        .map(|_| Scenario::new(config(100)).unwrap())
        .collect();

    for (scenario, strategy) in scenarios.iter().zip(Strategy::catalog(false)) {
        scenario.run(&strategy).unwrap();
    }
    for scenario in &scenarios {
        assert_eq!(scenario.verify().unwrap().touches, 1);
    }
}
