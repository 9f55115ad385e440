//! Error taxonomy for the API pipeline.
//!
//! Every call resolves to `ApiResult`; nothing throws across the pipeline
//! boundary. Callers branch on the kind and render `title()` + message as a
//! modal notification.

use std::fmt;

use serde_json::Value;

/// Result type for API pipeline operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Closed set of failure kinds a caller must handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A protected call was attempted with no active session. Detected
    /// locally, before any network I/O.
    AuthenticationMissing,
    /// Caller-supplied input was malformed. Detected before any network I/O.
    Validation { message: String },
    /// The server answered with a non-2xx status. The raw body is passed
    /// through uninterpreted for diagnostic display.
    Application { status: u16, body: String },
    /// A 2xx response body did not match the expected shape.
    Parsing { detail: String },
    /// Transport failure: refused connection, DNS, timeout.
    Connection { detail: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn application(status: u16, body: impl Into<String>) -> Self {
        ApiError::Application {
            status,
            body: body.into(),
        }
    }

    pub fn parsing(detail: impl Into<String>) -> Self {
        ApiError::Parsing {
            detail: detail.into(),
        }
    }

    pub fn connection(err: &reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("could not connect: {err}")
        } else {
            err.to_string()
        };
        ApiError::Connection { detail }
    }

    /// Short title for a modal notification, matching the kind.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::AuthenticationMissing => "Authentication Error",
            ApiError::Validation { .. } => "Validation Error",
            ApiError::Application { .. } => "Server Error",
            ApiError::Parsing { .. } => "Parsing Error",
            ApiError::Connection { .. } => "Connection Error",
        }
    }

    /// Tries to pull a readable message out of a JSON error body.
    ///
    /// Servers commonly answer `{"error": "..."}` or `{"message": "..."}`;
    /// anything else is displayed raw.
    fn body_summary(body: &str) -> Option<String> {
        let json: Value = serde_json::from_str(body).ok()?;
        for key in ["error", "message"] {
            if let Some(text) = json.get(key).and_then(Value::as_str) {
                return Some(text.to_string());
            }
        }
        None
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::AuthenticationMissing => {
                write!(f, "You are not logged in. Please log in and try again.")
            }
            ApiError::Validation { message } => write!(f, "{message}"),
            ApiError::Application { status, body } => {
                match Self::body_summary(body) {
                    Some(summary) => write!(f, "HTTP {status}: {summary}"),
                    None if body.is_empty() => write!(f, "HTTP {status}"),
                    None => write!(f, "HTTP {status}: {body}"),
                }
            }
            ApiError::Parsing { detail } => {
                write!(f, "Could not process the server's response: {detail}")
            }
            ApiError::Connection { detail } => {
                write!(f, "Could not connect to the server: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
