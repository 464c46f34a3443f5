//! Error types for the SendGrid connector

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A continuation token that the issuing list operation cannot decode.
    #[error("Invalid pagination token: {0:?}")]
    InvalidCursor(String),

    #[error("Provisioning rejected: {0}")]
    Provisioning(String),

    #[error("Operation timed out after {0:?}")]
    TimedOut(Duration),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Upstream API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the configured SendGrid API key.")]
    Unauthorized,

    #[error("Access denied. The API key lacks permission for this resource.")]
    Forbidden,

    /// 400/404 responses carrying the upstream `{errors: [{field, message}]}` payload.
    #[error("Upstream rejected the request: {0}")]
    UpstreamValidation(FieldErrors),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Whether an orchestrator may retry the failed call with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Transport("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::Transport(format!("Failed to decode response: {}", err))
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// A single field-level error reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending field; upstream sends `null` for request-wide errors
    #[serde(default)]
    pub field: Option<String>,

    /// Human readable message
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "field: {}, message: {}", field, self.message),
            None => write!(f, "message: {}", self.message),
        }
    }
}

/// All field errors from one upstream response, kept in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// Error envelope returned by the upstream on 400/404.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `sendgrid-connector init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "SendGrid API key not configured. Set SENDGRID_API_KEY or run `sendgrid-connector init`."
    )]
    MissingApiKey,

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
