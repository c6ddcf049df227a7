/*!
 * Channel Semaphore
 *
 * Binary exclusion token built from a bounded flume channel of capacity 1.
 * Acquiring inserts a token (blocking while the slot is full), releasing
 * removes it. Message-passing rendezvous instead of a lock primitive.
 */

use flume::{Receiver, Sender};
use thiserror::Error;

/// Token channel errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token channel disconnected")]
    Disconnected,
}

/// Single-slot channel semaphore
///
/// Holds both channel ends, so it stays connected for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ChannelSemaphore {
    slots: Sender<()>,
    tokens: Receiver<()>,
}

impl ChannelSemaphore {
    /// Create a binary semaphore (one holder at a time)
    pub fn binary() -> Self {
        let (slots, tokens) = flume::bounded(1);
        Self { slots, tokens }
    }

    /// Insert a token, blocking while the channel is full
    pub fn acquire(&self) -> Result<Permit<'_>, TokenError> {
        self.slots
            .send(())
            .map_err(|_| TokenError::Disconnected)?;
        Ok(Permit { semaphore: self })
    }

    #[cfg(test)]
    fn held(&self) -> usize {
        self.tokens.len()
    }
}

/// A held token; removed from the channel on drop
#[must_use = "dropping the permit releases the token immediately"]
pub struct Permit<'a> {
    semaphore: &'a ChannelSemaphore,
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        // Our own token keeps the channel non-empty, so this never waits
        if self.semaphore.tokens.try_recv().is_err() {
            tracing::error!("token channel empty while a permit was held");
        }
    }
}
