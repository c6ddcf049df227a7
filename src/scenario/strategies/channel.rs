/*!
 * Channel-Semaphore Strategies
 *
 * Same exclusion as `lock`, expressed as a capacity-1 channel rendezvous.
 */

use crate::core::errors::ScenarioResult;
use crate::core::sync::ChannelSemaphore;
use crate::scenario::state::GuardState;
use crate::scenario::{Scenario, SkipPoint, UnitOutcome};
use tracing::error;

impl Scenario {
    /// Take the token, check, act if needed, return the token
    pub fn channel(&self) -> ScenarioResult<()> {
        let token = ChannelSemaphore::binary();
        self.launch("Channel", false, move |state| with_token(state, &token))
    }

    /// Unlocked precheck, then the `channel` protocol
    pub fn channel_precheck(&self) -> ScenarioResult<()> {
        let token = ChannelSemaphore::binary();
        self.launch("ChannelPrecheck", false, move |state| {
            if state.check() {
                return UnitOutcome::Skipped(SkipPoint::Precheck);
            }
            with_token(state, &token)
        })
    }
}

fn with_token(state: &GuardState, token: &ChannelSemaphore) -> UnitOutcome {
    let _permit = match token.acquire() {
        Ok(permit) => permit,
        Err(err) => {
            error!(%err, "unit could not take the token");
            return UnitOutcome::Skipped(SkipPoint::TokenUnavailable);
        }
    };

    if state.check() {
        return UnitOutcome::Skipped(SkipPoint::TokenCheck);
    }
    state.act();
    UnitOutcome::Done
}
