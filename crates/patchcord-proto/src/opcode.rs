//! Gateway operation codes.

use serde::{Deserialize, Serialize};

/// Operation code carried in every gateway frame.
///
/// The client acts on a small named set; anything else on the wire is
/// carried through as [`Opcode::Unknown`] so the server remains free to
/// introduce new control frames without breaking envelope parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Opcode {
    /// Server-pushed event carrying an event name and sequence number.
    Dispatch,
    /// Liveness ping echoing the last seen sequence number.
    Heartbeat,
    /// Client credentials and capability bitmask, sent once after HELLO.
    Identify,
    /// First frame from the server, advertising the heartbeat interval.
    Hello,
    /// Server acknowledgement of a client heartbeat.
    HeartbeatAck,
    /// Any operation code the client does not act on.
    Unknown(u8),
}

impl Opcode {
    /// Numeric wire value of this opcode.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Dispatch => 0,
            Self::Heartbeat => 1,
            Self::Identify => 2,
            Self::Hello => 10,
            Self::HeartbeatAck => 11,
            Self::Unknown(op) => op,
        }
    }
}

impl From<u8> for Opcode {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Dispatch,
            1 => Self::Heartbeat,
            2 => Self::Identify,
            10 => Self::Hello,
            11 => Self::HeartbeatAck,
            other => Self::Unknown(other),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, Opcode::Dispatch)]
    #[test_case(1, Opcode::Heartbeat)]
    #[test_case(2, Opcode::Identify)]
    #[test_case(10, Opcode::Hello)]
    #[test_case(11, Opcode::HeartbeatAck)]
    fn test_opcode_from_wire_value(value: u8, expected: Opcode) {
        assert_eq!(Opcode::from(value), expected);
        assert_eq!(u8::from(expected), value);
    }

    #[test_case(7)]
    #[test_case(9)]
    #[test_case(255)]
    fn test_unacted_opcode_round_trips(value: u8) {
        let op = Opcode::from(value);
        assert_eq!(op, Opcode::Unknown(value));
        assert_eq!(op.as_u8(), value);
    }

    #[test]
    fn test_opcode_json_representation() {
        let json = serde_json::to_string(&Opcode::Hello).unwrap();
        assert_eq!(json, "10");

        let op: Opcode = serde_json::from_str("1").unwrap();
        assert_eq!(op, Opcode::Heartbeat);

        let op: Opcode = serde_json::from_str("11").unwrap();
        assert_eq!(op, Opcode::HeartbeatAck);
    }
}
