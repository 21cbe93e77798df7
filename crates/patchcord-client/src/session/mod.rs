//! Session state machine.
//!
//! A session moves strictly forward: dial, await HELLO, identify, then
//! steady state with three independent activities (heartbeat driver, reader
//! pump, writer pump) sharing a cancellation token. Any one of them failing
//! cancels the others; there is no resumption.

pub mod context;
pub mod events;
pub mod heartbeat;
pub(crate) mod pumps;
pub mod state;

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use patchcord_proto::{Frame, Hello, Identify, Opcode, OutboundFrame};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::WebSocketConfig;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::bootstrap;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::context::SessionContext;
use crate::session::events::SessionEvent;
use crate::session::heartbeat::negotiated_interval_ms;
use crate::session::state::{AtomicSessionState, SessionState};

pub(crate) type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Entry point for opening gateway sessions.
pub struct GatewayClient {
    config: ClientConfig,
    state: Arc<AtomicSessionState>,
}

impl GatewayClient {
    /// Create a client from a configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            state: Arc::new(AtomicSessionState::new(SessionState::Disconnected)),
        }
    }

    /// The current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.load()
    }

    /// Connect, perform the handshake, and start the steady-state
    /// activities.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration is invalid, the gateway URL
    /// lookup or dial fails, the server's first frame is not HELLO (no
    /// identify is sent in that case), or the advertised heartbeat interval
    /// is unusable. Every failure leaves the state at `Closed`.
    pub async fn connect(&self) -> Result<Session, ClientError> {
        self.config.validate()?;
        self.state.store(SessionState::Connecting);

        let result = self.handshake().await;
        if result.is_err() {
            self.state.store(SessionState::Closed);
        }
        result
    }

    async fn handshake(&self) -> Result<Session, ClientError> {
        let gateway_url = match &self.config.gateway_url {
            Some(url) => url.clone(),
            None => bootstrap::fetch_gateway_url(&self.config.api_base_url).await?,
        };
        let url = bootstrap::versioned_url(&gateway_url);

        let mut ws_config = WebSocketConfig::default();
        ws_config.max_message_size = Some(self.config.max_frame_bytes);
        let (mut socket, _) =
            tokio_tungstenite::connect_async_with_config(&url, Some(ws_config), false)
                .await
                .map_err(|e| ClientError::Connection(format!("failed to dial {url}: {e}")))?;
        info!(%gateway_url, "gateway socket open");

        self.state.store(SessionState::AwaitingHello);
        let hello = match await_hello(&mut socket).await {
            Ok(hello) => hello,
            Err(e) => {
                let _ = socket.close(None).await;
                return Err(e);
            }
        };
        let interval_ms = match negotiated_interval_ms(hello.heartbeat_interval) {
            Ok(ms) => ms,
            Err(e) => {
                let _ = socket.close(None).await;
                return Err(e);
            }
        };
        let ctx = Arc::new(SessionContext::new());
        ctx.set_heartbeat_interval(interval_ms);
        info!(
            advertised_ms = hello.heartbeat_interval,
            negotiated_ms = interval_ms,
            "heartbeat cadence negotiated"
        );

        self.state.store(SessionState::Identifying);
        let identify = Identify::new(self.config.token.clone(), self.config.intents);
        let text = OutboundFrame::identify(&identify)?.to_json()?;
        socket
            .send(Message::Text(text))
            .await
            .map_err(|e| ClientError::Transport(format!("failed to send identify: {e}")))?;

        self.state.store(SessionState::SteadyState);
        info!("session entering steady state");
        Ok(self.start_activities(socket, ctx))
    }

    fn start_activities(&self, socket: WsStream, ctx: Arc<SessionContext>) -> Session {
        let (write, read) = socket.split();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let tasks = vec![
            tokio::spawn(heartbeat::heartbeat_loop(
                Arc::clone(&ctx),
                outbound_tx.clone(),
                cancel.clone(),
            )),
            tokio::spawn(pumps::reader_loop(
                read,
                Arc::clone(&ctx),
                self.config.decode_events,
                inbound_tx,
                cancel.clone(),
            )),
            tokio::spawn(pumps::writer_loop(write, outbound_rx, cancel.clone())),
        ];

        Session {
            inbound: inbound_rx,
            outbound: outbound_tx,
            cancel,
            state: Arc::clone(&self.state),
            ctx,
            tasks,
        }
    }
}

/// Read frames until the first text envelope and require it to be HELLO.
async fn await_hello(socket: &mut WsStream) -> Result<Hello, ClientError> {
    loop {
        match socket.next().await {
            Some(Ok(Message::Text(text))) => {
                let frame = Frame::from_json(&text)?;
                return require_hello(&frame);
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                return Err(ClientError::Transport(format!(
                    "connection failed before HELLO: {e}"
                )))
            }
            None => {
                return Err(ClientError::Connection(
                    "connection closed before HELLO".to_string(),
                ))
            }
        }
    }
}

/// Enforce the handshake ordering: the first frame must be HELLO.
fn require_hello(frame: &Frame) -> Result<Hello, ClientError> {
    if frame.op != Opcode::Hello {
        return Err(ClientError::UnexpectedFirstFrame(frame.op.as_u8()));
    }
    Ok(Hello::from_value(frame.data.as_ref())?)
}

/// A live gateway session.
///
/// Dropping a session without calling [`Session::close`] cancels the
/// background activities but does not wait for them.
#[derive(Debug)]
pub struct Session {
    inbound: mpsc::UnboundedReceiver<SessionEvent>,
    outbound: mpsc::UnboundedSender<OutboundFrame>,
    cancel: CancellationToken,
    state: Arc<AtomicSessionState>,
    ctx: Arc<SessionContext>,
    tasks: Vec<JoinHandle<()>>,
}

impl Session {
    /// Receive the next inbound event. `None` means the session has shut
    /// down and the queue is drained.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.inbound.recv().await
    }

    /// Enqueue an outbound frame. Never blocks on the network; the writer
    /// pump drains the queue in FIFO order alongside heartbeats.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has shut down.
    pub fn send(&self, frame: OutboundFrame) -> Result<(), ClientError> {
        self.outbound
            .send(frame)
            .map_err(|_| ClientError::Transport("session is closed".to_string()))
    }

    /// The current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.load()
    }

    /// The highest dispatch sequence seen so far.
    #[must_use]
    pub fn last_sequence(&self) -> Option<u64> {
        self.ctx.last_sequence()
    }

    /// The negotiated heartbeat interval in milliseconds.
    #[must_use]
    pub fn heartbeat_interval_ms(&self) -> Option<u64> {
        self.ctx.heartbeat_interval_ms()
    }

    /// Shut down: cancel the three activities together, close the socket,
    /// and wait for the tasks. Cancellation is a normal exit, not an error.
    pub async fn close(mut self) {
        self.state.store(SessionState::Closing);
        self.cancel.cancel();
        for task in self.tasks.drain(..) {
            let _ = task.await;
        }
        self.state.store(SessionState::Closed);
        info!("session closed");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame(op: Opcode, data: serde_json::Value) -> Frame {
        Frame {
            op,
            sequence: None,
            event: None,
            data: Some(data),
        }
    }

    #[test]
    fn test_require_hello_accepts_hello() {
        let hello = require_hello(&frame(Opcode::Hello, json!({"heartbeat_interval": 41250})))
            .unwrap();
        assert_eq!(hello.heartbeat_interval, 41_250);
    }

    #[test]
    fn test_require_hello_rejects_dispatch_first() {
        let err = require_hello(&frame(Opcode::Dispatch, json!({}))).unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedFirstFrame(0)));
    }

    #[test]
    fn test_require_hello_rejects_heartbeat_first() {
        let err = require_hello(&frame(Opcode::Heartbeat, json!(null))).unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedFirstFrame(1)));
    }

    #[test]
    fn test_new_client_is_disconnected() {
        let client = GatewayClient::new(ClientConfig::new("tok"));
        assert_eq!(client.state(), SessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_config() {
        let client = GatewayClient::new(ClientConfig::new(""));
        let err = client.connect().await.unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
