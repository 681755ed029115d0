//! # Request Gateway
//!
//! The sole component issuing outbound HTTP calls to the Bolna API. Every
//! call attaches the fixed bearer-auth and JSON content-type headers, applies
//! the configured timeout, and normalizes failures into a [`GatewayError`]
//! carrying the failure kind. Each call is attempted exactly once; there are
//! no retries and no backoff.

use serde_json::Value;
use tracing::{debug, error};

use crate::config::BolnaConfig;

/// HTTP verbs the gateway dispatches on
///
/// A closed set; dispatch is a match over this tag rather than string
/// comparison at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Parse a verb tag, case-insensitively. Unrecognized verbs fall back to
    /// GET, matching the gateway's default method.
    pub fn parse(verb: &str) -> Self {
        match verb.to_ascii_uppercase().as_str() {
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::Get,
        }
    }

    /// Whether this verb carries a JSON request body
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure taxonomy for outbound calls
///
/// All three kinds collapse to the same observable outcome at the operation
/// layer (an absent result); the kind is kept inspectable internally and in
/// the diagnostic log.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// DNS, connection, or timeout failure before a status was received
    #[error("Transport error calling {url}: {message}")]
    Transport { url: String, message: String },

    /// The remote returned a 4xx/5xx status
    #[error("HTTP status error: {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body was not valid JSON
    #[error("Decode error from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Result of one outbound call: the decoded JSON body, or the failure kind
pub type GatewayResult = std::result::Result<Value, GatewayError>;

/// Issues one HTTP request per invocation against the Bolna API
///
/// Holds the immutable connection configuration; a transient HTTP client is
/// built per call, so the gateway itself manages no connection state.
#[derive(Debug, Clone)]
pub struct RequestGateway {
    config: BolnaConfig,
}

impl RequestGateway {
    /// Create a gateway over the given connection configuration
    pub fn new(config: BolnaConfig) -> Self {
        Self { config }
    }

    /// The connection configuration this gateway was built with
    pub fn config(&self) -> &BolnaConfig {
        &self.config
    }

    /// Perform one request and return the decoded JSON body
    ///
    /// The payload is sent as the JSON body for POST/PUT and ignored for
    /// GET/DELETE. Any failure during transport, status checking, or body
    /// decoding is returned as a [`GatewayError`]; nothing is retried.
    pub async fn request(
        &self,
        url: &str,
        method: HttpMethod,
        payload: Option<&Value>,
    ) -> GatewayResult {
        debug!(method = %method, url = %url, "Issuing Bolna API request");

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout())
            .build()
            .map_err(|e| GatewayError::Transport { url: url.to_string(), message: e.to_string() })?;

        let mut builder = match method {
            HttpMethod::Get => client.get(url),
            HttpMethod::Post => client.post(url),
            HttpMethod::Put => client.put(url),
            HttpMethod::Delete => client.delete(url),
        };

        builder = builder
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if method.has_body() {
            if let Some(body) = payload {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await.map_err(|e| {
            error!(method = %method, url = %url, error = %e, "Bolna API request failed");
            GatewayError::Transport { url: url.to_string(), message: e.to_string() }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Bolna API returned error status"
            );
            return Err(GatewayError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let value = response.json::<Value>().await.map_err(|e| {
            error!(method = %method, url = %url, error = %e, "Failed to decode Bolna API response");
            GatewayError::Decode { url: url.to_string(), message: e.to_string() }
        })?;

        debug!(method = %method, url = %url, "Bolna API request completed");

        Ok(value)
    }
}
