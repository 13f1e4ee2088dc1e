// src/error.rs

//! Unified error handling for the tafseer application.

use std::fmt;

use thiserror::Error;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request did not complete before the deadline
    #[error("Timeout after {timeout_ms}ms fetching {url}")]
    Timeout { url: String, timeout_ms: u64 },

    /// Transport-level fault (DNS, connection reset, TLS)
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Upstream answered with a non-success status code
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Response body was malformed or missing a required field
    #[error("Payload error from {url}: {message}")]
    PayloadShape { url: String, message: String },

    /// Every registered endpoint failed and local data was absent
    #[error("All tafseer sources exhausted for {chapter}:{verse} ({})", .attempts.join("; "))]
    AllEndpointsExhausted {
        chapter: u32,
        verse: u32,
        attempts: Vec<String>,
        local_checked: bool,
    },

    /// Chapter number outside 1..=114
    #[error("Invalid chapter number {0}: must be between 1 and 114")]
    InvalidChapter(u32),

    /// Chapter text or translation service failed
    #[error("Upstream unavailable ({context}): {message}")]
    UpstreamUnavailable { context: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a timeout error.
    pub fn timeout(url: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            url: url.into(),
            timeout_ms,
        }
    }

    /// Create a transport error.
    pub fn transport(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a payload-shape error.
    pub fn payload(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::PayloadShape {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an upstream-unavailable error with context.
    pub fn upstream(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::UpstreamUnavailable {
            context: context.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message_joins_attempts() {
        let err = AppError::AllEndpointsExhausted {
            chapter: 2,
            verse: 255,
            attempts: vec!["A: timeout".into(), "B: HTTP 503".into()],
            local_checked: true,
        };
        let msg = err.to_string();
        assert!(msg.contains("2:255"));
        assert!(msg.contains("A: timeout; B: HTTP 503"));
    }
}
