/*!
 * Coordination Strategies
 *
 * Each strategy is a per-unit protocol plus the primitive it coordinates
 * through. The primitive is created per run (or supplied by the caller) and
 * moved into the shared unit closure, never stored globally.
 *
 * - `lock`: exclusive lock, with and without precheck
 * - `rwlock`: shared then exclusive lock, with and without precheck
 * - `once`: one-shot gate, fresh with precheck or caller-supplied without
 * - `channel`: capacity-1 channel as a binary token, with and without precheck
 * - `atomic`: swap and compare-and-swap claims, with and without precheck
 */

pub(crate) mod atomic;
pub(crate) mod channel;
pub(crate) mod lock;
pub(crate) mod once;
pub(crate) mod rwlock;
