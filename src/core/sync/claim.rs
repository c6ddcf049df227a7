/*!
 * Claim Flag
 * Atomic boolean claim used as the single decision point for atomic strategies
 */

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared claim flag
///
/// Whoever flips it from `false` to `true` owns the guarded action.
#[derive(Debug, Default)]
pub struct ClaimFlag {
    claimed: AtomicBool,
}

impl ClaimFlag {
    /// Create an unclaimed flag
    pub const fn new() -> Self {
        Self {
            claimed: AtomicBool::new(false),
        }
    }

    /// Create a flag that is already claimed
    pub const fn preclaimed() -> Self {
        Self {
            claimed: AtomicBool::new(true),
        }
    }

    /// Swap in `true` and inspect the previous value
    ///
    /// Returns `true` if this caller won the claim.
    #[inline]
    pub fn swap_claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::AcqRel)
    }

    /// Compare-and-swap `false -> true`
    ///
    /// Returns `true` if this caller won the claim.
    #[inline]
    pub fn try_claim(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether someone holds the claim
    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}
