/*!
 * Synchronization Primitives
 *
 * Building blocks the strategies coordinate with:
 * - `WaitGroup`: completion barrier for a batch of units
 * - `OnceGate`: one-shot gate, optionally pre-fired
 * - `ChannelSemaphore`: bounded channel used as an exclusion token
 * - `ClaimFlag`: atomic claim for swap/CAS strategies
 */

mod claim;
mod once_gate;
mod semaphore;
mod wait_group;

pub use claim::ClaimFlag;
pub use once_gate::OnceGate;
pub use semaphore::{ChannelSemaphore, Permit, TokenError};
pub use wait_group::WaitGroup;
