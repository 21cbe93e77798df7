//! Session lifecycle states.

use std::sync::atomic::{AtomicU32, Ordering};

/// State of a gateway session.
///
/// States advance strictly forward; there is no resumption or reconnect, so
/// a closed session stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No connection attempt yet.
    Disconnected,
    /// Dialing the socket.
    Connecting,
    /// Connected, waiting for the server's HELLO.
    AwaitingHello,
    /// HELLO received, identify being sent.
    Identifying,
    /// Handshake complete; pumps and heartbeat running.
    SteadyState,
    /// Shutdown requested, tasks winding down.
    Closing,
    /// Fully shut down.
    Closed,
}

/// Atomic wrapper for the session state.
#[derive(Debug)]
pub struct AtomicSessionState(AtomicU32);

impl AtomicSessionState {
    /// Create a new atomic state.
    #[must_use]
    pub const fn new(state: SessionState) -> Self {
        Self(AtomicU32::new(state as u32))
    }

    /// Load the current state.
    #[must_use]
    pub fn load(&self) -> SessionState {
        match self.0.load(Ordering::SeqCst) {
            0 => SessionState::Disconnected,
            1 => SessionState::Connecting,
            2 => SessionState::AwaitingHello,
            3 => SessionState::Identifying,
            4 => SessionState::SteadyState,
            5 => SessionState::Closing,
            _ => SessionState::Closed,
        }
    }

    /// Store a new state.
    pub fn store(&self, state: SessionState) {
        self.0.store(state as u32, Ordering::SeqCst);
    }
}
