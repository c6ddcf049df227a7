/*!
 * Core Module
 * Errors, limits, and synchronization primitives
 */

pub mod errors;
pub mod limits;
pub mod sync;

// Re-export for convenience
pub use errors::*;
