/*!
 * Strategy Catalog
 *
 * Names the twelve strategies as data so drivers, benches, and tests can
 * iterate over them. `Scenario::run` dispatches on the enum.
 */

use super::Scenario;
use crate::core::errors::ScenarioResult;
use crate::core::sync::{ClaimFlag, OnceGate};
use std::sync::Arc;

/// A coordination strategy, with its caller-owned primitive where it has one
#[derive(Debug, Clone)]
pub enum Strategy {
    Lock,
    LockPrecheck,
    RwLock,
    RwLockPrecheck,
    OncePrecheck,
    Once(Arc<OnceGate>),
    Channel,
    ChannelPrecheck,
    AtomicSwap(Arc<ClaimFlag>),
    AtomicSwapPrecheck,
    AtomicCas(Arc<ClaimFlag>),
    AtomicCasPrecheck,
}

impl Strategy {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Lock => "Lock",
            Strategy::LockPrecheck => "LockPrecheck",
            Strategy::RwLock => "RWLock",
            Strategy::RwLockPrecheck => "RWLockPreCheck",
            Strategy::OncePrecheck => "OncePrecheck",
            Strategy::Once(_) => "Once",
            Strategy::Channel => "Channel",
            Strategy::ChannelPrecheck => "ChannelPrecheck",
            Strategy::AtomicSwap(_) => "AtomicSwap",
            Strategy::AtomicSwapPrecheck => "AtomicSwapPrecheck",
            Strategy::AtomicCas(_) => "AtomicCAS",
            Strategy::AtomicCasPrecheck => "AtomicCASPrecheck",
        }
    }

    /// Whether units read `completed` unlocked before claiming
    pub fn has_precheck(&self) -> bool {
        matches!(
            self,
            Strategy::LockPrecheck
                | Strategy::RwLockPrecheck
                | Strategy::OncePrecheck
                | Strategy::ChannelPrecheck
                | Strategy::AtomicSwapPrecheck
                | Strategy::AtomicCasPrecheck
        )
    }

    /// Same strategy with a fresh caller-supplied primitive
    ///
    /// `preclaimed` fires the gate or sets the flag up front. Strategies
    /// without an external primitive are returned unchanged.
    pub fn renewed(&self, preclaimed: bool) -> Strategy {
        match self {
            Strategy::Once(_) => Strategy::Once(Arc::new(gate(preclaimed))),
            Strategy::AtomicSwap(_) => Strategy::AtomicSwap(Arc::new(flag(preclaimed))),
            Strategy::AtomicCas(_) => Strategy::AtomicCas(Arc::new(flag(preclaimed))),
            other => other.clone(),
        }
    }

    /// The sibling without a precheck, if this strategy has one
    pub fn baseline(&self, preclaimed: bool) -> Option<Strategy> {
        let plain = match self {
            Strategy::LockPrecheck => Strategy::Lock,
            Strategy::RwLockPrecheck => Strategy::RwLock,
            Strategy::OncePrecheck => Strategy::Once(Arc::new(gate(preclaimed))),
            Strategy::ChannelPrecheck => Strategy::Channel,
            Strategy::AtomicSwapPrecheck => Strategy::AtomicSwap(Arc::new(flag(preclaimed))),
            Strategy::AtomicCasPrecheck => Strategy::AtomicCas(Arc::new(flag(preclaimed))),
            _ => return None,
        };
        Some(plain)
    }

    /// All twelve strategies
    ///
    /// Caller-supplied primitives are consistent with `preclaimed`: spent
    /// gates and set flags for a scenario whose action already ran.
    pub fn catalog(preclaimed: bool) -> Vec<Strategy> {
        vec![
            Strategy::Lock,
            Strategy::LockPrecheck,
            Strategy::RwLock,
            Strategy::RwLockPrecheck,
            Strategy::OncePrecheck,
            Strategy::Once(Arc::new(gate(preclaimed))),
            Strategy::Channel,
            Strategy::ChannelPrecheck,
            Strategy::AtomicSwap(Arc::new(flag(preclaimed))),
            Strategy::AtomicSwapPrecheck,
            Strategy::AtomicCas(Arc::new(flag(preclaimed))),
            Strategy::AtomicCasPrecheck,
        ]
    }

    /// `(baseline, precheck)` pairs
    pub fn precheck_pairs(preclaimed: bool) -> Vec<(Strategy, Strategy)> {
        Self::catalog(preclaimed)
            .into_iter()
            .filter_map(|s| s.baseline(preclaimed).map(|base| (base, s)))
            .collect()
    }
}

fn gate(spent: bool) -> OnceGate {
    if spent {
        OnceGate::spent()
    } else {
        OnceGate::new()
    }
}

fn flag(claimed: bool) -> ClaimFlag {
    if claimed {
        ClaimFlag::preclaimed()
    } else {
        ClaimFlag::new()
    }
}

impl Scenario {
    /// Launch `strategy` (enum dispatch to the matching operation)
    pub fn run(&self, strategy: &Strategy) -> ScenarioResult<()> {
        match strategy {
            Strategy::Lock => self.lock(),
            Strategy::LockPrecheck => self.lock_precheck(),
            Strategy::RwLock => self.rw_lock(),
            Strategy::RwLockPrecheck => self.rw_lock_precheck(),
            Strategy::OncePrecheck => self.once_precheck(),
            Strategy::Once(gate) => self.once(Arc::clone(gate)),
            Strategy::Channel => self.channel(),
            Strategy::ChannelPrecheck => self.channel_precheck(),
            Strategy::AtomicSwap(flag) => self.atomic_swap(Arc::clone(flag)),
            Strategy::AtomicSwapPrecheck => self.atomic_swap_precheck(),
            Strategy::AtomicCas(flag) => self.atomic_cas(Arc::clone(flag)),
            Strategy::AtomicCasPrecheck => self.atomic_cas_precheck(),
        }
    }
}
