/*!
 * Run Tracing
 * Structured tracing for scenario runs using the tracing crate
 *
 * Features:
 * - Run ID generation for correlating a launch with its verification
 * - JSON-formatted logs for structured parsing
 * - Per-run spans recording strategy, concurrency, and outcome
 */

use crate::core::errors::VerifyError;
use crate::core::limits::ENV_TRACE_JSON;
use crate::scenario::Verdict;
use std::time::{Duration, Instant};
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Runs slower than this get a warning on drop
const SLOW_RUN_THRESHOLD: Duration = Duration::from_secs(5);

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - RACE_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique run ID
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one strategy run, from launch through verification
pub struct RunSpan {
    span: tracing::Span,
    start: Instant,
    strategy: &'static str,
    run_id: String,
}

impl RunSpan {
    pub fn new(strategy: &'static str, concurrency: usize) -> Self {
        let run_id = generate_run_id();
        let span = span!(
            Level::INFO,
            "run",
            run_id = %run_id,
            strategy,
            concurrency,
            touches = tracing::field::Empty,
            result = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        {
            let _entered = span.enter();
            debug!(strategy, concurrency, "run started");
        }

        Self {
            span,
            start: Instant::now(),
            strategy,
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Time since the run was launched
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record a verification result on the span
    pub fn record_verdict(&self, result: &Result<Verdict, VerifyError>) {
        match result {
            Ok(verdict) => {
                self.span.record("touches", verdict.touches);
                self.span.record("result", "ok");
            }
            Err(err) => {
                self.span.record("result", err.to_string().as_str());
            }
        }
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_ms", duration.as_millis() as u64);

        if duration > SLOW_RUN_THRESHOLD {
            warn!(
                run_id = %self.run_id,
                strategy = self.strategy,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow run"
            );
        } else {
            debug!(
                run_id = %self.run_id,
                strategy = self.strategy,
                duration_us = duration.as_micros() as u64,
                "run finished"
            );
        }
    }
}
