//! Reader and writer pumps.
//!
//! The reader turns text frames into [`SessionEvent`]s; the writer drains
//! the outbound queue onto the socket. Both select on the cancellation
//! token with `biased` so no frame is read or written after cancellation
//! is observed, and either side failing cancels the whole session.

use std::sync::Arc;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use patchcord_proto::{Frame, OutboundFrame};
use patchcord_schema::decode_frame;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::session::context::SessionContext;
use crate::session::events::SessionEvent;
use crate::session::WsStream;

pub(crate) async fn reader_loop(
    mut read: SplitStream<WsStream>,
    ctx: Arc<SessionContext>,
    decode_events: bool,
    inbound: mpsc::UnboundedSender<SessionEvent>,
    cancel: CancellationToken,
) {
    loop {
        let message = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            message = read.next() => message,
        };
        let reason = match message {
            Some(Ok(Message::Text(text))) => {
                if deliver_text(&text, &ctx, decode_events, &inbound).is_err() {
                    // Application dropped the queue.
                    break;
                }
                continue;
            }
            // Pings are answered by the transport; nothing else matters.
            Some(Ok(Message::Close(frame))) => frame.map_or_else(
                || "closed by server".to_string(),
                |f| format!("closed by server: {} {}", f.code, f.reason),
            ),
            Some(Ok(_)) => continue,
            Some(Err(e)) => e.to_string(),
            None => "connection closed".to_string(),
        };
        info!(%reason, "gateway connection ended");
        let _ = inbound.send(SessionEvent::Disconnected { reason });
        break;
    }
    cancel.cancel();
}

/// Parse one text frame and push the resulting event. `Err` means the
/// inbound queue is gone.
fn deliver_text(
    text: &str,
    ctx: &SessionContext,
    decode_events: bool,
    inbound: &mpsc::UnboundedSender<SessionEvent>,
) -> Result<(), ()> {
    let event = match Frame::from_json(text) {
        Ok(frame) => {
            if let Some(sequence) = frame.sequence {
                ctx.record_sequence(sequence);
            }
            if !decode_events {
                SessionEvent::Frame(frame)
            } else {
                match decode_frame(&frame) {
                    Ok(event) => SessionEvent::Event(event),
                    Err(error) => {
                        warn!(name = ?frame.event, ?error, "payload rejected by schema");
                        SessionEvent::DecodeFailed {
                            name: frame.event,
                            sequence: frame.sequence,
                            error,
                        }
                    }
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "discarding unparseable frame");
            SessionEvent::ParseFailed {
                reason: e.to_string(),
            }
        }
    };
    inbound.send(event).map_err(|_| ())
}

pub(crate) async fn writer_loop(
    mut write: SplitSink<WsStream, Message>,
    mut outbound: mpsc::UnboundedReceiver<OutboundFrame>,
    cancel: CancellationToken,
) {
    loop {
        let frame = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            frame = outbound.recv() => match frame {
                Some(frame) => frame,
                None => break,
            },
        };
        match frame.to_json() {
            Ok(json) => {
                if let Err(e) = write.send(Message::Text(json)).await {
                    error!(error = %e, "outbound send failed");
                    break;
                }
                debug!(op = ?frame.op, "frame sent");
            }
            Err(e) => {
                // A frame that cannot serialize is dropped, not fatal.
                error!(error = %e, "failed to serialize outbound frame");
            }
        }
    }
    cancel.cancel();
    let _ = write.close().await;
}
