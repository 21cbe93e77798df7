//! # patchcord-proto
//!
//! Wire-level protocol definitions for the Patchcord gateway client:
//! opcodes, the `{"op": <int>, "d": <payload>}` frame envelope, and the
//! handshake payloads exchanged during connection setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod frame;
pub mod opcode;
pub mod payloads;

pub use error::ProtoError;
pub use frame::{Frame, OutboundFrame};
pub use opcode::Opcode;
pub use payloads::{ConnectionProperties, Hello, Identify};

/// Gateway API version spoken by this client.
pub const API_VERSION: u32 = 10;

/// Base URL for the one-shot HTTP gateway address lookup.
pub const API_BASE_URL: &str = "https://discord.com/api/v10/";

/// User agent sent on the gateway address lookup request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:129.0) Gecko/20100101 Firefox/129.0";

/// Default capability bitmask declared in the identify payload.
pub const DEFAULT_INTENTS: u64 = 33_280;

/// Safety margin subtracted from the server-advertised heartbeat interval,
/// in milliseconds. Keeps the client's heartbeat ahead of the server's own
/// timeout under scheduling jitter.
pub const HEARTBEAT_SKEW_MS: u64 = 2_000;

/// Maximum accepted size of a single inbound frame, in bytes.
pub const MAX_FRAME_BYTES: usize = 1 << 22;
