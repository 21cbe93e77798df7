//! Persistent gateway session client.
//!
//! Opens a long-lived WebSocket to the event gateway, performs the strict
//! HELLO → IDENTIFY handshake, then keeps three activities running until
//! cancellation: a heartbeat driver on the server-dictated cadence, a
//! reader pump that turns frames into decoded events, and a writer pump
//! that drains the outbound queue. Application code talks to the session
//! through two unbounded queues and never touches the socket directly.
//!
//! ```no_run
//! # async fn run() -> Result<(), patchcord_client::ClientError> {
//! let mut session = patchcord_client::connect("my-token").await?;
//! while let Some(event) = session.next_event().await {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod session;

pub use config::ClientConfig;
pub use error::ClientError;
pub use session::context::SessionContext;
pub use session::events::SessionEvent;
pub use session::heartbeat::negotiated_interval_ms;
pub use session::state::SessionState;
pub use session::{GatewayClient, Session};

/// Connect with default settings: look up the gateway URL over HTTP and
/// open a session for the token.
///
/// # Errors
///
/// Returns an error if the lookup, dial, or handshake fails.
pub async fn connect(token: impl Into<String>) -> Result<Session, ClientError> {
    GatewayClient::new(ClientConfig::new(token)).connect().await
}
