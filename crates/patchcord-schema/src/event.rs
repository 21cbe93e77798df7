//! Decoded gateway events.

use patchcord_proto::Frame;
use serde_json::Value;
use tracing::warn;

use crate::decode::{decode, DecodeError, DecodedValue, Record};
use crate::registry::registry;

/// A frame after schema decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Operation code of the originating frame.
    pub op: patchcord_proto::Opcode,
    /// Sequence number, when the frame carried one.
    pub sequence: Option<u64>,
    /// Dispatch event name, when the frame carried one.
    pub name: Option<String>,
    /// Decoded payload.
    pub data: EventPayload,
}

/// Payload of a decoded event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Payload decoded against a registered shape.
    Record(Record),
    /// Raw payload for events with no registered shape.
    Raw(Value),
    /// The frame carried no payload.
    None,
}

/// Decode a parsed frame into an event.
///
/// Dispatch frames whose event name has a registered shape are decoded
/// against it; names without one keep their raw payload and log a single
/// warning. Non-dispatch frames always keep their raw payload.
///
/// # Errors
///
/// Returns an error when the registered shape rejects the payload.
pub fn decode_frame(frame: &Frame) -> Result<Event, DecodeError> {
    let data = match (&frame.data, &frame.event) {
        (None, _) => EventPayload::None,
        (Some(raw), Some(name)) => match registry().event_shape(name) {
            Some(shape) => match decode(shape, raw)? {
                DecodedValue::Record(record) => EventPayload::Record(record),
                other => {
                    debug_assert!(matches!(other, DecodedValue::Raw(_)));
                    EventPayload::Raw(raw.clone())
                }
            },
            None => {
                warn!(event = %name, "no registered shape for event, passing payload through");
                EventPayload::Raw(raw.clone())
            }
        },
        (Some(raw), None) => EventPayload::Raw(raw.clone()),
    };
    Ok(Event {
        op: frame.op,
        sequence: frame.sequence,
        name: frame.event.clone(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeId;
    use patchcord_proto::Opcode;
    use serde_json::json;

    fn dispatch(name: &str, sequence: u64, data: Value) -> Frame {
        Frame {
            op: Opcode::Dispatch,
            sequence: Some(sequence),
            event: Some(name.to_string()),
            data: Some(data),
        }
    }

    #[test]
    fn test_known_event_decodes_to_record() {
        let frame = dispatch("MESSAGE_CREATE", 4, json!({"id": 1, "content": "hi"}));
        let event = decode_frame(&frame).unwrap();

        assert_eq!(event.sequence, Some(4));
        let EventPayload::Record(record) = &event.data else {
            panic!("expected a decoded record");
        };
        assert_eq!(record.shape(), ShapeId::MessageCreate);
        assert_eq!(record.get("content").unwrap().as_str(), Some("hi"));
    }

    #[test]
    fn test_unknown_event_passes_payload_through() {
        let frame = dispatch("SOME_FUTURE_EVENT", 9, json!({"anything": [1, 2]}));
        let event = decode_frame(&frame).unwrap();
        assert_eq!(event.data, EventPayload::Raw(json!({"anything": [1, 2]})));
    }

    /// Counts warning-level events so tests can assert on diagnostics.
    struct WarnCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

    impl tracing::Subscriber for WarnCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_unknown_event_emits_exactly_one_warning() {
        let count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let subscriber = WarnCounter(std::sync::Arc::clone(&count));

        let frame = dispatch("SOME_FUTURE_EVENT", 9, json!({"anything": true}));
        let event =
            tracing::subscriber::with_default(subscriber, || decode_frame(&frame)).unwrap();

        assert_eq!(event.data, EventPayload::Raw(json!({"anything": true})));
        assert_eq!(count.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_frame_without_payload() {
        let frame = Frame {
            op: Opcode::Hello,
            sequence: None,
            event: None,
            data: None,
        };
        let event = decode_frame(&frame).unwrap();
        assert_eq!(event.data, EventPayload::None);
    }

    #[test]
    fn test_decode_failure_surfaces() {
        let frame = dispatch("USER_UPDATE", 2, json!("not an object"));
        let err = decode_frame(&frame).unwrap_err();
        assert_eq!(err, DecodeError::ExpectedObject { shape: ShapeId::User });
    }
}
