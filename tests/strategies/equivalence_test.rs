/*!
 * Precheck Equivalence
 *
 * A precheck changes contention, never the observable outcome.
 */

use race_guard::{Scenario, ScenarioConfig, Strategy};
use proptest::prelude::*;
use std::time::Duration;

fn outcome_of(config: ScenarioConfig, strategy: &Strategy, done: bool) -> (usize, bool, bool) {
    let scenario = if done {
        Scenario::new_done(config).unwrap()
    } else {
        Scenario::new(config).unwrap()
    };
    scenario.run(strategy).unwrap();
    let verified = scenario.verify().is_ok();
    (scenario.touch_count(), scenario.is_completed(), verified)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_precheck_pairs_agree(
        concurrency in 1usize..64,
        done in any::<bool>(),
        check_us in 0u64..300,
    ) {
        let config = ScenarioConfig::default()
            .with_concurrency(concurrency)
            .with_check_duration(Duration::from_micros(check_us));

        for (base, pre) in Strategy::precheck_pairs(done) {
            let base_outcome = outcome_of(config, &base, done);
            let pre_outcome = outcome_of(config, &pre, done);

            prop_assert_eq!(base_outcome, pre_outcome, "{} vs {}", base.name(), pre.name());
            prop_assert!(base_outcome.2, "{} failed verification", base.name());
        }
    }
}
