/*!
 * Monitoring
 * Structured tracing setup and per-run spans
 */

pub mod tracer;

pub use tracer::{generate_run_id, init_tracing, RunSpan};
