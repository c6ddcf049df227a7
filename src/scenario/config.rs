/*!
 * Scenario Configuration
 *
 * Runtime configuration for a scenario run: how many units race and how
 * long the simulated check and act take.
 */

use crate::core::errors::{ScenarioError, ScenarioResult};
use crate::core::limits::{
    DEFAULT_CONCURRENCY, ENV_ACT_MS, ENV_CHECK_MS, ENV_CONCURRENCY, ENV_STACK_KB,
    MAX_CONCURRENCY, MIN_UNIT_STACK_SIZE, STANDARD_ACT_DURATION, STANDARD_CONCURRENCY,
    UNIT_STACK_SIZE,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scenario configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of racing units spawned per run
    pub concurrency: usize,
    /// Simulated cost of the guarded action (zero means no delay)
    pub act_duration: Duration,
    /// Simulated cost of observing completion (zero means no delay)
    pub check_duration: Duration,
    /// Stack size of each unit thread, in bytes
    pub stack_size: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            act_duration: Duration::ZERO,
            check_duration: Duration::ZERO,
            stack_size: UNIT_STACK_SIZE,
        }
    }
}

impl ScenarioConfig {
    /// 10k units and a slow guarded action
    pub const fn standard() -> Self {
        Self {
            concurrency: STANDARD_CONCURRENCY,
            act_duration: STANDARD_ACT_DURATION,
            check_duration: Duration::ZERO,
            stack_size: UNIT_STACK_SIZE,
        }
    }

    /// 10k units with no simulated latency (pure contention)
    pub const fn contended() -> Self {
        Self {
            concurrency: STANDARD_CONCURRENCY,
            act_duration: Duration::ZERO,
            check_duration: Duration::ZERO,
            stack_size: UNIT_STACK_SIZE,
        }
    }

    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub const fn with_act_duration(mut self, act_duration: Duration) -> Self {
        self.act_duration = act_duration;
        self
    }

    pub const fn with_check_duration(mut self, check_duration: Duration) -> Self {
        self.check_duration = check_duration;
        self
    }

    pub const fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Reject configurations no run can honor
    pub fn validate(&self) -> ScenarioResult<()> {
        if self.concurrency == 0 {
            return Err(ScenarioError::InvalidConfig(
                "concurrency must be at least 1".into(),
            ));
        }
        if self.concurrency > MAX_CONCURRENCY {
            return Err(ScenarioError::InvalidConfig(format!(
                "concurrency {} exceeds maximum {}",
                self.concurrency, MAX_CONCURRENCY
            )));
        }
        if self.stack_size < MIN_UNIT_STACK_SIZE {
            return Err(ScenarioError::InvalidConfig(format!(
                "stack size {} below minimum {}",
                self.stack_size, MIN_UNIT_STACK_SIZE
            )));
        }
        Ok(())
    }

    /// Default configuration overridden by environment variables
    ///
    /// Environment variables:
    /// - RACE_CONCURRENCY: units per run
    /// - RACE_ACT_MS: act latency in milliseconds
    /// - RACE_CHECK_MS: check latency in milliseconds
    /// - RACE_STACK_KB: unit stack size in kilobytes
    pub fn from_env() -> ScenarioResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> ScenarioResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(n) = parse_var(&lookup, ENV_CONCURRENCY)? {
            config.concurrency = n as usize;
        }
        if let Some(ms) = parse_var(&lookup, ENV_ACT_MS)? {
            config.act_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, ENV_CHECK_MS)? {
            config.check_duration = Duration::from_millis(ms);
        }
        if let Some(kb) = parse_var(&lookup, ENV_STACK_KB)? {
            config.stack_size = (kb as usize).saturating_mul(1024);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> ScenarioResult<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|e| {
                ScenarioError::InvalidConfig(format!("{key}={raw:?}: {e}"))
            })
        })
        .transpose()
}
