//! Frame envelope encoding and decoding.
//!
//! Every gateway exchange is a UTF-8 JSON text frame. Inbound frames carry
//! `op`, an optional sequence number `s` and event name `t` (dispatch only),
//! and an opaque payload `d`. Outbound frames carry only `op` and `d`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtoError;
use crate::opcode::Opcode;
use crate::payloads::Identify;

/// An inbound frame as received from the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Operation code.
    pub op: Opcode,
    /// Sequence number; present only on dispatch frames.
    #[serde(rename = "s", default)]
    pub sequence: Option<u64>,
    /// Event name; present only on dispatch frames.
    #[serde(rename = "t", default)]
    pub event: Option<String>,
    /// Opaque payload body.
    #[serde(rename = "d", default)]
    pub data: Option<Value>,
}

impl Frame {
    /// Parse a frame from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid envelope. Unrecognized
    /// operation codes are not an error; they parse as [`Opcode::Unknown`].
    pub fn from_json(text: &str) -> Result<Self, ProtoError> {
        serde_json::from_str(text).map_err(|e| ProtoError::Decoding(e.to_string()))
    }

    /// Whether this frame is a dispatch (named, sequenced event).
    #[must_use]
    pub fn is_dispatch(&self) -> bool {
        self.op == Opcode::Dispatch
    }
}

/// An outbound frame, encoded as `{"op": <int>, "d": <payload or null>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundFrame {
    /// Operation code.
    pub op: Opcode,
    /// Payload body; `null` when the operation carries none.
    #[serde(rename = "d")]
    pub data: Value,
}

impl OutboundFrame {
    /// Build an outbound frame from an opcode and payload.
    #[must_use]
    pub const fn new(op: Opcode, data: Value) -> Self {
        Self { op, data }
    }

    /// Build a heartbeat frame echoing the last seen sequence number, or
    /// `null` if no dispatch frame has arrived yet.
    #[must_use]
    pub fn heartbeat(last_sequence: Option<u64>) -> Self {
        let data = match last_sequence {
            Some(seq) => Value::from(seq),
            None => Value::Null,
        };
        Self::new(Opcode::Heartbeat, data)
    }

    /// Build an identify frame from the handshake payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload fails to serialize.
    pub fn identify(payload: &Identify) -> Result<Self, ProtoError> {
        let data =
            serde_json::to_value(payload).map_err(|e| ProtoError::Encoding(e.to_string()))?;
        Ok(Self::new(Opcode::Identify, data))
    }

    /// Encode this frame as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ProtoError> {
        serde_json::to_string(self).map_err(|e| ProtoError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_dispatch_frame() {
        let text = r#"{"op":0,"s":42,"t":"MESSAGE_CREATE","d":{"id":1}}"#;
        let frame = Frame::from_json(text).unwrap();

        assert_eq!(frame.op, Opcode::Dispatch);
        assert_eq!(frame.sequence, Some(42));
        assert_eq!(frame.event.as_deref(), Some("MESSAGE_CREATE"));
        assert_eq!(frame.data, Some(json!({"id": 1})));
        assert!(frame.is_dispatch());
    }

    #[test]
    fn test_parse_hello_frame_without_sequence() {
        let text = r#"{"op":10,"d":{"heartbeat_interval":41250}}"#;
        let frame = Frame::from_json(text).unwrap();

        assert_eq!(frame.op, Opcode::Hello);
        assert_eq!(frame.sequence, None);
        assert_eq!(frame.event, None);
        assert!(!frame.is_dispatch());
    }

    #[test]
    fn test_parse_heartbeat_ack_frame() {
        let frame = Frame::from_json(r#"{"op":11,"d":null}"#).unwrap();
        assert_eq!(frame.op, Opcode::HeartbeatAck);
        assert_eq!(frame.sequence, None);
        assert_eq!(frame.data, None);
        assert!(!frame.is_dispatch());
    }

    #[test]
    fn test_parse_carries_unrecognized_opcode_through() {
        let frame = Frame::from_json(r#"{"op":99,"d":{"k":1}}"#).unwrap();
        assert_eq!(frame.op, Opcode::Unknown(99));
        assert_eq!(frame.data, Some(json!({"k": 1})));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Frame::from_json("not json").is_err());
    }

    #[test]
    fn test_heartbeat_with_sequence() {
        let frame = OutboundFrame::heartbeat(Some(8));
        assert_eq!(frame.to_json().unwrap(), r#"{"op":1,"d":8}"#);
    }

    #[test]
    fn test_heartbeat_without_sequence() {
        let frame = OutboundFrame::heartbeat(None);
        assert_eq!(frame.to_json().unwrap(), r#"{"op":1,"d":null}"#);
    }

    #[test]
    fn test_outbound_round_trips_through_inbound_parser() {
        let outbound = OutboundFrame::new(Opcode::Heartbeat, json!({"nested": [1, 2, 3]}));
        let text = outbound.to_json().unwrap();

        let parsed = Frame::from_json(&text).unwrap();
        assert_eq!(parsed.op, outbound.op);
        assert_eq!(parsed.data, Some(outbound.data));
        assert_eq!(parsed.sequence, None);
        assert_eq!(parsed.event, None);
    }

    proptest::proptest! {
        #[test]
        fn test_heartbeat_round_trips_for_any_sequence(seq in proptest::option::of(proptest::prelude::any::<u64>())) {
            let text = OutboundFrame::heartbeat(seq).to_json().unwrap();
            let frame = Frame::from_json(&text).unwrap();
            proptest::prop_assert_eq!(frame.op, Opcode::Heartbeat);
            let expected = match seq {
                Some(s) => Value::from(s),
                None => Value::Null,
            };
            proptest::prop_assert_eq!(frame.data, Some(expected));
        }
    }

    #[test]
    fn test_identify_frame_shape() {
        let identify = Identify::new("token-123", 33_280);
        let frame = OutboundFrame::identify(&identify).unwrap();
        let value = serde_json::to_value(&frame).unwrap();

        assert_eq!(value["op"], 2);
        assert_eq!(value["d"]["token"], "token-123");
        assert_eq!(value["d"]["intents"], 33_280);
        assert_eq!(value["d"]["properties"]["$os"], "windows");
    }
}
