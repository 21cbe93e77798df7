//! Client error types.

use patchcord_proto::ProtoError;

/// Errors surfaced by the session client.
///
/// Per-frame decode anomalies are delivered as inbound events, not errors,
/// and cancellation is a normal exit.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Gateway URL lookup failed.
    #[error("gateway bootstrap failed: {0}")]
    Bootstrap(String),

    /// The WebSocket connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The established connection failed mid-session.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server's first frame was not HELLO.
    #[error("protocol violation: expected HELLO as the first frame, got opcode {0}")]
    UnexpectedFirstFrame(u8),

    /// The advertised heartbeat interval leaves no positive cadence after
    /// the skew is subtracted.
    #[error("advertised heartbeat interval {advertised_ms}ms does not exceed the {skew_ms}ms skew")]
    HeartbeatIntervalTooShort {
        /// Interval advertised by the server.
        advertised_ms: u64,
        /// Skew subtracted from every advertised interval.
        skew_ms: u64,
    },

    /// Wire-level encode or decode failure during the handshake.
    #[error(transparent)]
    Proto(#[from] ProtoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_first_frame_display() {
        let err = ClientError::UnexpectedFirstFrame(0);
        assert_eq!(
            err.to_string(),
            "protocol violation: expected HELLO as the first frame, got opcode 0"
        );
    }

    #[test]
    fn test_interval_too_short_display() {
        let err = ClientError::HeartbeatIntervalTooShort {
            advertised_ms: 1500,
            skew_ms: 2000,
        };
        assert!(err.to_string().contains("1500ms"));
        assert!(err.to_string().contains("2000ms"));
    }

    #[test]
    fn test_proto_error_converts() {
        let err: ClientError = ProtoError::MissingField("d").into();
        assert!(matches!(err, ClientError::Proto(_)));
    }
}
