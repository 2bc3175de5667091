//! Error handling module for the People screen client.
//!
//! Provides the gateway error type with stable error codes. Gateway failures
//! are never fatal to the screen; the controller recovers them locally as an
//! errored, empty display.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const PORTAL_ERROR: &str = "PORTAL_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Error returned by portal query gateways.
#[derive(Debug)]
pub enum GatewayError {
    /// Transport-level failure (connection refused, timeout, TLS)
    Network(String),
    /// Response body could not be decoded as the expected envelope
    Decode(String),
    /// The portal answered with an error status or error envelope
    Portal {
        status: u16,
        code: String,
        message: String,
    },
    /// Client-side configuration problem (bad URL, bad API key)
    Config(String),
}

impl GatewayError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &str {
        match self {
            GatewayError::Network(_) => codes::NETWORK_ERROR,
            GatewayError::Decode(_) => codes::DECODE_ERROR,
            GatewayError::Portal { code, .. } => code,
            GatewayError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            GatewayError::Network(msg) => msg.clone(),
            GatewayError::Decode(msg) => msg.clone(),
            GatewayError::Portal {
                status, message, ..
            } => format!("HTTP {}: {}", status, message),
            GatewayError::Config(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_decode() {
            GatewayError::Decode(format!("Decode error: {}", err))
        } else {
            GatewayError::Network(format!("Network error: {}", err))
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        GatewayError::Decode(format!("JSON error: {}", err))
    }
}
