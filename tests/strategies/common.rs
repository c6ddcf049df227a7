/*!
 * Shared helpers for strategy tests
 */

use race_guard::{Scenario, ScenarioConfig, Strategy, Verdict, VerifyError};
use std::time::Duration;

/// Concurrency levels every strategy is exercised at
pub const LEVELS: [usize; 3] = [1, 10, 10_000];

/// Repetitions per level; races need repeated trials to show up
pub fn trials_for(concurrency: usize) -> usize {
    if concurrency >= 10_000 {
        2
    } else {
        20
    }
}

pub fn config(concurrency: usize) -> ScenarioConfig {
    ScenarioConfig::default().with_concurrency(concurrency)
}

/// Launch `strategy` on a fresh scenario and verify it
pub fn run_once(
    config: ScenarioConfig,
    strategy: &Strategy,
    done: bool,
) -> Result<Verdict, VerifyError> {
    let scenario = if done {
        Scenario::new_done(config).unwrap()
    } else {
        Scenario::new(config).unwrap()
    };
    scenario.run(strategy).unwrap();
    assert!(
        scenario.wait_timeout(Duration::from_secs(60)),
        "{} did not finish",
        strategy.name()
    );
    scenario.verify()
}
