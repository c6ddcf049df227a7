/*!
 * One-Shot Gate
 *
 * Exactly one caller executes the wrapped closure. Every caller, including
 * that one, returns only after the closure has finished.
 */

use parking_lot::Once;

/// One-shot execution gate backed by `parking_lot::Once`
///
/// # Example
///
/// ```
/// use race_guard::core::sync::OnceGate;
///
/// let gate = OnceGate::new();
/// assert!(gate.fire(|| {}));
/// assert!(!gate.fire(|| unreachable!()));
/// assert!(gate.is_spent());
/// ```
#[derive(Debug)]
pub struct OnceGate {
    once: Once,
}

impl OnceGate {
    /// Create an unfired gate
    pub const fn new() -> Self {
        Self { once: Once::new() }
    }

    /// Create a gate that has already fired
    ///
    /// Models a gate reused from an earlier run.
    pub fn spent() -> Self {
        let gate = Self::new();
        gate.fire(|| {});
        gate
    }

    /// Run `f` if this is the first call
    ///
    /// Concurrent callers block until the first caller's `f` returns.
    /// Returns `true` if this caller executed `f`.
    pub fn fire<F>(&self, f: F) -> bool
    where
        F: FnOnce(),
    {
        let mut ran = false;
        self.once.call_once(|| {
            f();
            ran = true;
        });
        ran
    }

    /// Whether the wrapped closure has completed
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.once.state().done()
    }
}

impl Default for OnceGate {
    fn default() -> Self {
        Self::new()
    }
}
