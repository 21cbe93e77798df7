//! Handshake payload bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtoError;

/// Free-form description of the client environment, sent inside the
/// identify payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProperties {
    /// Operating system name.
    #[serde(rename = "$os")]
    pub os: String,
    /// Browser or library name.
    #[serde(rename = "$browser")]
    pub browser: String,
    /// Device name.
    #[serde(rename = "$device")]
    pub device: String,
}

impl Default for ConnectionProperties {
    fn default() -> Self {
        Self {
            os: "windows".to_string(),
            browser: "disco".to_string(),
            device: "disco".to_string(),
        }
    }
}

/// Identify payload: credential token plus declared capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identify {
    /// Credential token.
    pub token: String,
    /// Capability bitmask.
    pub intents: u64,
    /// Client environment description.
    pub properties: ConnectionProperties,
}

impl Identify {
    /// Build an identify payload with default connection properties.
    #[must_use]
    pub fn new(token: impl Into<String>, intents: u64) -> Self {
        Self {
            token: token.into(),
            intents,
            properties: ConnectionProperties::default(),
        }
    }
}

/// Hello payload: the server-advertised heartbeat cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hello {
    /// Advertised heartbeat interval in milliseconds.
    pub heartbeat_interval: u64,
}

impl Hello {
    /// Extract the hello payload from a frame body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is absent or malformed.
    pub fn from_value(data: Option<&Value>) -> Result<Self, ProtoError> {
        let data = data.ok_or(ProtoError::MissingField("d"))?;
        serde_json::from_value(data.clone()).map_err(|e| ProtoError::Decoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identify_serializes_prefixed_property_keys() {
        let identify = Identify::new("t", 512);
        let value = serde_json::to_value(&identify).unwrap();

        assert_eq!(value["properties"]["$os"], "windows");
        assert_eq!(value["properties"]["$browser"], "disco");
        assert_eq!(value["properties"]["$device"], "disco");
    }

    #[test]
    fn test_hello_from_value() {
        let data = json!({"heartbeat_interval": 41250});
        let hello = Hello::from_value(Some(&data)).unwrap();
        assert_eq!(hello.heartbeat_interval, 41_250);
    }

    #[test]
    fn test_hello_missing_body() {
        let err = Hello::from_value(None).unwrap_err();
        assert!(matches!(err, ProtoError::MissingField("d")));
    }

    #[test]
    fn test_hello_malformed_body() {
        let data = json!({"interval": 41250});
        assert!(Hello::from_value(Some(&data)).is_err());
    }
}
