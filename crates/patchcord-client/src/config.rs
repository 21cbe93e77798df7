//! Client configuration.
//!
//! Loaded from a TOML file, from the environment, or built in code. The
//! only required value is the credential token; everything else defaults to
//! the protocol constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use patchcord_proto::{API_BASE_URL, DEFAULT_INTENTS, MAX_FRAME_BYTES};

use crate::error::ClientError;

/// Environment variable carrying the credential token.
pub const TOKEN_ENV: &str = "PATCHCORD_TOKEN";
/// Environment variable overriding the intents bitmask.
pub const INTENTS_ENV: &str = "PATCHCORD_INTENTS";

/// Configuration for a gateway session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Credential token sent in the identify payload.
    pub token: String,
    /// Capability bitmask sent in the identify payload.
    #[serde(default = "default_intents")]
    pub intents: u64,
    /// Explicit gateway WebSocket URL; when absent it is looked up over
    /// HTTP before connecting.
    #[serde(default)]
    pub gateway_url: Option<String>,
    /// Base URL for the HTTP API, used only for the gateway URL lookup.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Maximum accepted inbound frame size in bytes.
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
    /// Whether dispatch payloads are decoded against the schema registry.
    /// When off, raw parsed frames are delivered instead.
    #[serde(default = "default_decode_events")]
    pub decode_events: bool,
}

fn default_intents() -> u64 {
    DEFAULT_INTENTS
}

fn default_api_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_max_frame_bytes() -> usize {
    MAX_FRAME_BYTES
}

fn default_decode_events() -> bool {
    true
}

impl ClientConfig {
    /// Build a configuration with default settings for a token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            intents: DEFAULT_INTENTS,
            gateway_url: None,
            api_base_url: API_BASE_URL.to_string(),
            max_frame_bytes: MAX_FRAME_BYTES,
            decode_events: true,
        }
    }

    /// Set an explicit gateway URL, skipping the HTTP lookup.
    #[must_use]
    pub fn with_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_url = Some(url.into());
        self
    }

    /// Set the intents bitmask.
    #[must_use]
    pub const fn with_intents(mut self, intents: u64) -> Self {
        self.intents = intents;
        self
    }

    /// Disable schema decoding; raw frames are delivered instead.
    #[must_use]
    pub const fn raw_frames(mut self) -> Self {
        self.decode_events = false;
        self
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// parsed values are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ClientError::Config(format!(
                "failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the values fail
    /// validation.
    pub fn from_toml(content: &str) -> Result<Self, ClientError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ClientError::Config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the token variable is unset or the intents
    /// override is not an integer.
    pub fn from_env() -> Result<Self, ClientError> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| ClientError::Config(format!("{TOKEN_ENV} is not set")))?;
        let mut config = Self::new(token);
        if let Ok(raw) = std::env::var(INTENTS_ENV) {
            config.intents = raw
                .parse()
                .map_err(|_| ClientError::Config(format!("{INTENTS_ENV} is not an integer")))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is unusable.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.token.is_empty() {
            return Err(ClientError::Config("token cannot be empty".to_string()));
        }
        if self.api_base_url.is_empty() {
            return Err(ClientError::Config(
                "api_base_url cannot be empty".to_string(),
            ));
        }
        if self.max_frame_bytes == 0 {
            return Err(ClientError::Config(
                "max_frame_bytes must be positive".to_string(),
            ));
        }
        if let Some(url) = &self.gateway_url {
            if !url.starts_with("ws://") && !url.starts_with("wss://") {
                return Err(ClientError::Config(format!(
                    "gateway_url must be a ws:// or wss:// URL, got '{url}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_new_uses_protocol_defaults() {
        let config = ClientConfig::new("tok");
        assert_eq!(config.intents, DEFAULT_INTENTS);
        assert_eq!(config.api_base_url, API_BASE_URL);
        assert_eq!(config.max_frame_bytes, MAX_FRAME_BYTES);
        assert!(config.decode_events);
        assert!(config.gateway_url.is_none());
    }

    #[test]
    fn test_from_toml_minimal() {
        let config = ClientConfig::from_toml(r#"token = "tok""#).unwrap();
        assert_eq!(config.token, "tok");
        assert_eq!(config.intents, DEFAULT_INTENTS);
    }

    #[test]
    fn test_from_toml_full() {
        let config = ClientConfig::from_toml(
            r#"
            token = "tok"
            intents = 512
            gateway_url = "wss://gateway.example"
            max_frame_bytes = 1024
            decode_events = false
            "#,
        )
        .unwrap();
        assert_eq!(config.intents, 512);
        assert_eq!(config.gateway_url.as_deref(), Some("wss://gateway.example"));
        assert_eq!(config.max_frame_bytes, 1024);
        assert!(!config.decode_events);
    }

    #[test_case("" ; "empty token")]
    fn test_validate_rejects_empty_token(token: &str) {
        assert!(ClientConfig::new(token).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_frame_size() {
        let mut config = ClientConfig::new("tok");
        config.max_frame_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test_case("http://not-a-socket" => false ; "http scheme rejected")]
    #[test_case("ws://127.0.0.1:9" => true ; "plain ws accepted")]
    #[test_case("wss://gateway.example" => true ; "tls ws accepted")]
    fn test_validate_gateway_url_scheme(url: &str) -> bool {
        ClientConfig::new("tok")
            .with_gateway_url(url)
            .validate()
            .is_ok()
    }

    #[test]
    fn test_builder_toggles() {
        let config = ClientConfig::new("tok").with_intents(7).raw_frames();
        assert_eq!(config.intents, 7);
        assert!(!config.decode_events);
    }
}
