use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status. The body is kept as
    /// raw JSON so the serializer can read it defensively.
    #[error("HTTP {status}")]
    Http {
        status: u16,
        body: serde_json::Value,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid API origin: {0}")]
    InvalidOrigin(#[from] url::ParseError),

    /// Sentinel for a request whose owning component unmounted. Never shown
    /// to the user; handlers suppress it unconditionally.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// One field-level validation entry from a structured error body. The form
/// maps each entry to a field annotation using the first message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub field: String,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl FieldError {
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// The normalized view of a transport error: `{message, errors, status}`.
///
/// `message` and `errors` are independent and may co-occur; either drives a
/// page-level banner, field annotations, or both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub errors: Option<Vec<FieldError>>,
    pub status: Option<u16>,
}

/// Normalizes an [`ApiError`] into `{message, errors, status}`.
///
/// Every level of the response body is read defensively: a missing or
/// differently-shaped level yields `None` rather than failing.
#[must_use]
pub fn serialize_error(error: &ApiError) -> ErrorBody {
    match error {
        ApiError::Http { status, body } => ErrorBody {
            message: body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string),
            errors: body
                .get("errors")
                .cloned()
                .and_then(|value| serde_json::from_value(value).ok()),
            status: body
                .get("status")
                .and_then(serde_json::Value::as_u64)
                .and_then(|code| u16::try_from(code).ok())
                .or(Some(*status)),
        },
        ApiError::Transport(_) | ApiError::InvalidOrigin(_) | ApiError::Cancelled => {
            ErrorBody::default()
        }
    }
}
