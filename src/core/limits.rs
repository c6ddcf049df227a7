/*!
 * Scenario Limits and Constants
 *
 * Centralized defaults and bounds for scenario runs.
 * Values marked [BENCH] are the benchmark-scale defaults.
 */

use std::time::Duration;

// =============================================================================
// CONCURRENCY
// =============================================================================

/// Units spawned by `ScenarioConfig::default()`
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Units spawned by the standard and contended presets
/// [BENCH] 10k racing callers
pub const STANDARD_CONCURRENCY: usize = 10_000;

/// Upper bound on units per run
/// Each unit is an OS thread, so this also caps thread creation per run
pub const MAX_CONCURRENCY: usize = 100_000;

// =============================================================================
// SIMULATED LATENCY
// =============================================================================

/// Simulated cost of the guarded action in the standard preset
/// [BENCH] subtract this from benchmark timings
pub const STANDARD_ACT_DURATION: Duration = Duration::from_secs(2);

// =============================================================================
// THREAD RESOURCES
// =============================================================================

/// Stack size for each unit thread (64KB)
/// Units only run a short protocol, so the default 2MB stack is wasted
/// at 10k threads
pub const UNIT_STACK_SIZE: usize = 64 * 1024;

/// Smallest stack size accepted by config validation (16KB)
pub const MIN_UNIT_STACK_SIZE: usize = 16 * 1024;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides `concurrency`
pub const ENV_CONCURRENCY: &str = "RACE_CONCURRENCY";

/// Overrides `act_duration`, in milliseconds
pub const ENV_ACT_MS: &str = "RACE_ACT_MS";

/// Overrides `check_duration`, in milliseconds
pub const ENV_CHECK_MS: &str = "RACE_CHECK_MS";

/// Overrides `stack_size`, in kilobytes
pub const ENV_STACK_KB: &str = "RACE_STACK_KB";

/// Enables JSON tracing output when "1" or "true"
pub const ENV_TRACE_JSON: &str = "RACE_TRACE_JSON";

/// Enables JSON report lines from the driver when "1" or "true"
pub const ENV_REPORT_JSON: &str = "RACE_REPORT_JSON";
