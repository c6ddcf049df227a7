/*!
 * Race Guard Library
 * At-most-once execution strategies raced by N concurrent units, plus the
 * verifier that checks the invariant held
 */

pub mod core;
pub mod monitoring;
pub mod scenario;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::sync::{ChannelSemaphore, ClaimFlag, OnceGate, WaitGroup};
pub use monitoring::{init_tracing, RunSpan};
pub use scenario::{
    judge, Expectation, OutcomeSnapshot, Scenario, ScenarioConfig, SkipPoint, Strategy,
    UnitOutcome, Verdict,
};
