/*!
 * Race Guard - Driver
 *
 * Runs every strategy once from an unclaimed start and once from a claimed
 * start, verifying each run.
 *
 * Configuration comes from the environment (see `ScenarioConfig::from_env`).
 * Set RACE_REPORT_JSON=1 for one JSON report line per run on stdout.
 */

use miette::{IntoDiagnostic, Result};
use race_guard::core::limits::ENV_REPORT_JSON;
use race_guard::{init_tracing, RunSpan, Scenario, ScenarioConfig, Strategy, Verdict};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct RunReport<'a> {
    run_id: &'a str,
    strategy: &'static str,
    preclaimed: bool,
    elapsed_us: u64,
    config: ScenarioConfig,
    verdict: Verdict,
}

fn main() -> Result<()> {
    init_tracing();

    let config = ScenarioConfig::from_env()?;
    let report_json = std::env::var(ENV_REPORT_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    info!(
        concurrency = config.concurrency,
        act_ms = config.act_duration.as_millis() as u64,
        check_ms = config.check_duration.as_millis() as u64,
        "Race guard starting"
    );

    for preclaimed in [false, true] {
        for strategy in Strategy::catalog(preclaimed) {
            let scenario = if preclaimed {
                Scenario::new_done(config)?
            } else {
                Scenario::new(config)?
            };

            let span = RunSpan::new(strategy.name(), config.concurrency);
            let _entered = span.enter();
            scenario.run(&strategy)?;
            let result = scenario.verify();
            span.record_verdict(&result);
            let verdict = result?;

            info!(
                strategy = strategy.name(),
                preclaimed,
                touches = verdict.touches,
                done = verdict.outcomes.done,
                prechecked = verdict.outcomes.precheck,
                elapsed_ms = span.elapsed().as_millis() as u64,
                "strategy verified"
            );

            if report_json {
                let report = RunReport {
                    run_id: span.run_id(),
                    strategy: strategy.name(),
                    preclaimed,
                    elapsed_us: span.elapsed().as_micros() as u64,
                    config,
                    verdict,
                };
                println!("{}", serde_json::to_string(&report).into_diagnostic()?);
            }
        }
    }

    info!("All strategies verified");
    Ok(())
}
