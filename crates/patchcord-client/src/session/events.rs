//! Events delivered on the inbound queue.

use patchcord_proto::Frame;
use patchcord_schema::{DecodeError, Event};

/// One item on a session's inbound queue.
///
/// Per-frame anomalies travel on the queue as error-carrying variants so
/// the reader pump never stops over a single bad payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A frame decoded against the schema registry.
    Event(Event),
    /// A parsed frame, delivered as-is when schema decoding is disabled.
    Frame(Frame),
    /// A frame whose envelope parsed but whose payload the registered
    /// shape rejected.
    DecodeFailed {
        /// Dispatch event name, when present.
        name: Option<String>,
        /// Sequence number, when present.
        sequence: Option<u64>,
        /// The decoder's rejection.
        error: DecodeError,
    },
    /// A text frame that was not a valid envelope.
    ParseFailed {
        /// Parser diagnostic.
        reason: String,
    },
    /// The connection ended; no further events follow.
    Disconnected {
        /// Close or error description.
        reason: String,
    },
}
