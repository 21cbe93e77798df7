//! Shared session counters.
//!
//! Two single-writer atomics cover everything the steady-state activities
//! share: the handshake writes the heartbeat interval once, and the reader
//! pump advances the last-seen sequence. The heartbeat driver only reads.
//! No lock is involved.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// No sequence seen yet.
const NO_SEQUENCE: i64 = -1;

/// Counters shared between the handshake, the reader pump, and the
/// heartbeat driver.
#[derive(Debug)]
pub struct SessionContext {
    /// Negotiated heartbeat cadence in milliseconds; zero until the
    /// handshake completes.
    heartbeat_interval_ms: AtomicU64,
    /// Highest dispatch sequence observed, or [`NO_SEQUENCE`].
    last_sequence: AtomicI64,
}

impl SessionContext {
    /// Create a fresh context with no interval and no sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heartbeat_interval_ms: AtomicU64::new(0),
            last_sequence: AtomicI64::new(NO_SEQUENCE),
        }
    }

    /// Record the negotiated heartbeat interval. Written once, by the
    /// handshake.
    pub fn set_heartbeat_interval(&self, interval_ms: u64) {
        self.heartbeat_interval_ms.store(interval_ms, Ordering::SeqCst);
    }

    /// The negotiated heartbeat interval, if the handshake has completed.
    #[must_use]
    pub fn heartbeat_interval_ms(&self) -> Option<u64> {
        match self.heartbeat_interval_ms.load(Ordering::SeqCst) {
            0 => None,
            ms => Some(ms),
        }
    }

    /// Advance the last-seen sequence. Stale or duplicate values never move
    /// the counter backwards.
    pub fn record_sequence(&self, sequence: u64) {
        let sequence = i64::try_from(sequence).unwrap_or(i64::MAX);
        self.last_sequence.fetch_max(sequence, Ordering::SeqCst);
    }

    /// The highest sequence seen so far.
    #[must_use]
    pub fn last_sequence(&self) -> Option<u64> {
        match self.last_sequence.load(Ordering::SeqCst) {
            NO_SEQUENCE => None,
            seen => u64::try_from(seen).ok(),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context_is_empty() {
        let ctx = SessionContext::new();
        assert_eq!(ctx.heartbeat_interval_ms(), None);
        assert_eq!(ctx.last_sequence(), None);
    }

    #[test]
    fn test_interval_set_once() {
        let ctx = SessionContext::new();
        ctx.set_heartbeat_interval(39_250);
        assert_eq!(ctx.heartbeat_interval_ms(), Some(39_250));
    }

    #[test]
    fn test_sequence_is_monotone() {
        let ctx = SessionContext::new();
        for seq in [1, 2, 3, 5, 8] {
            ctx.record_sequence(seq);
        }
        assert_eq!(ctx.last_sequence(), Some(8));

        // Late arrival of an old sequence never regresses the counter.
        ctx.record_sequence(3);
        assert_eq!(ctx.last_sequence(), Some(8));
    }

    #[test]
    fn test_sequence_zero_is_recorded() {
        let ctx = SessionContext::new();
        ctx.record_sequence(0);
        assert_eq!(ctx.last_sequence(), Some(0));
    }
}
