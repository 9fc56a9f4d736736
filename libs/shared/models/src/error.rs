use serde_json::Value;
use thiserror::Error;

/// Body of a non-success response from the patient API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorResponse {
    /// JSON object carrying a `detail` key.
    Detail(String),
    /// Anything else: empty, not JSON, or JSON without `detail`.
    Unstructured,
}

impl ErrorResponse {
    pub fn from_body(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self::Unstructured;
        };

        match value.get("detail") {
            Some(Value::String(detail)) => Self::Detail(detail.clone()),
            Some(Value::Null) | None => Self::Unstructured,
            // Validation failures come back as a list of objects
            Some(other) => Self::Detail(other.to_string()),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Detail(detail) => Some(detail),
            Self::Unstructured => None,
        }
    }

    /// The server-provided detail, or `fallback` when there is none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail().unwrap_or(fallback)
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API error ({status}): {}", .body.message_or("no detail"))]
    Remote { status: u16, body: ErrorResponse },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// The request body could not be turned into JSON; nothing was sent.
    #[error("Could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
