//! Error types for the patchcord-proto crate.

use thiserror::Error;

/// Errors that can occur during wire encoding and decoding.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// Failed to encode a frame.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Failed to decode a frame.
    #[error("decoding error: {0}")]
    Decoding(String),

    /// A payload was missing a field required by the protocol.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
