//! Gateway URL lookup.
//!
//! One HTTP round trip before the WebSocket dial: `GET {api_base}gateway`
//! returns the socket URL to connect to.

use serde::Deserialize;

use patchcord_proto::{API_VERSION, USER_AGENT};

use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct GatewayInfo {
    url: String,
}

/// Fetch the gateway WebSocket URL from the HTTP API.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the body is not the expected JSON document.
pub async fn fetch_gateway_url(api_base_url: &str) -> Result<String, ClientError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ClientError::Bootstrap(format!("failed to build HTTP client: {e}")))?;

    let endpoint = join_endpoint(api_base_url, "gateway");
    let info: GatewayInfo = client
        .get(&endpoint)
        .send()
        .await
        .map_err(|e| ClientError::Bootstrap(format!("request to {endpoint} failed: {e}")))?
        .error_for_status()
        .map_err(|e| ClientError::Bootstrap(format!("gateway lookup rejected: {e}")))?
        .json()
        .await
        .map_err(|e| ClientError::Bootstrap(format!("malformed gateway response: {e}")))?;

    Ok(info.url)
}

/// Append the protocol version and encoding query to a gateway URL.
#[must_use]
pub fn versioned_url(gateway_url: &str) -> String {
    format!("{gateway_url}/?v={API_VERSION}&encoding=json")
}

fn join_endpoint(base: &str, path: &str) -> String {
    let trimmed = base.strip_suffix('/').unwrap_or(base);
    format!("{trimmed}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versioned_url() {
        assert_eq!(
            versioned_url("wss://gateway.example"),
            "wss://gateway.example/?v=10&encoding=json"
        );
    }

    #[test]
    fn test_join_endpoint_normalizes_slash() {
        assert_eq!(join_endpoint("https://api.example/", "gateway"), "https://api.example/gateway");
        assert_eq!(join_endpoint("https://api.example", "gateway"), "https://api.example/gateway");
    }
}
