//! Heartbeat driver.
//!
//! Sleeps the negotiated interval, then enqueues a heartbeat echoing the
//! last-seen sequence. The queue is unbounded, so a heartbeat is never
//! silently dropped; it is serialized FIFO with application writes.

use std::sync::Arc;
use std::time::Duration;

use patchcord_proto::{OutboundFrame, HEARTBEAT_SKEW_MS};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::ClientError;
use crate::session::context::SessionContext;

/// Subtract the fixed skew from a server-advertised interval.
///
/// # Errors
///
/// Returns an error when the advertised interval does not exceed the skew,
/// which would leave no positive cadence.
pub fn negotiated_interval_ms(advertised_ms: u64) -> Result<u64, ClientError> {
    if advertised_ms <= HEARTBEAT_SKEW_MS {
        return Err(ClientError::HeartbeatIntervalTooShort {
            advertised_ms,
            skew_ms: HEARTBEAT_SKEW_MS,
        });
    }
    Ok(advertised_ms - HEARTBEAT_SKEW_MS)
}

/// Run the heartbeat loop until cancellation.
///
/// Sleep first, send after: the first heartbeat goes out one full interval
/// after the handshake.
pub(crate) async fn heartbeat_loop(
    ctx: Arc<SessionContext>,
    outbound: mpsc::UnboundedSender<OutboundFrame>,
    cancel: CancellationToken,
) {
    // Written once by the handshake before this task is spawned.
    let Some(interval_ms) = ctx.heartbeat_interval_ms() else {
        debug!("heartbeat driver started without a negotiated interval");
        cancel.cancel();
        return;
    };
    let interval = Duration::from_millis(interval_ms);

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(interval) => {
                let frame = OutboundFrame::heartbeat(ctx.last_sequence());
                if outbound.send(frame).is_err() {
                    // Writer gone; bring the rest of the session down.
                    cancel.cancel();
                    break;
                }
                debug!(sequence = ?ctx.last_sequence(), "heartbeat enqueued");
            }
        }
    }
}
