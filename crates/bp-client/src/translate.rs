//! Translation of transport outcomes into [`Error`]s.
//!
//! Every non-success outcome (non-200 status, empty or malformed body,
//! network failure) becomes exactly one error tagged with the operation in
//! flight. Nothing is suppressed and nothing is retried.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde_json::Value;

use crate::error::{Error, ErrorKind, Operation, Result};
use crate::response::Response;

const MAX_BODY_LENGTH: usize = 500;

static SESSION_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(SessionID|access_token|refresh_token)"\s*:\s*"[^"]*""#).unwrap()
});

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[A-Za-z0-9._~+/-]+=*").unwrap());

/// Error for a response whose status is not 200.
pub fn from_status(operation: Operation, status: u16, body: &str) -> Error {
    Error::new(ErrorKind::Status {
        operation,
        status,
        body: sanitize_error_message(body),
    })
}

/// Error for a failed network call.
pub fn from_transport(operation: Operation, err: reqwest::Error) -> Error {
    let message = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    };
    Error::with_source(ErrorKind::Transport { operation, message }, err)
}

/// Error for a body that is not valid JSON.
pub fn from_json(operation: Operation, err: serde_json::Error) -> Error {
    Error::with_source(
        ErrorKind::InvalidBody {
            operation,
            message: err.to_string(),
        },
        err,
    )
}

/// Error for a success response missing an expected field.
pub fn missing_field(operation: Operation, field: impl Into<String>) -> Error {
    Error::new(ErrorKind::MissingField {
        operation,
        field: field.into(),
    })
}

/// Pass the response through if its status is 200, otherwise read the body
/// and turn it into an error.
pub async fn expect_ok(response: Response) -> Result<Response> {
    if response.is_ok() {
        return Ok(response);
    }

    let operation = response.operation();
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(from_status(operation, status, &body))
}

/// Require status 200 and a non-empty JSON body, returned verbatim.
pub async fn expect_json(response: Response) -> Result<Value> {
    let operation = response.operation();
    let body = expect_ok(response).await?.text().await?;
    parse_body(operation, &body)
}

/// Parse a success body, rejecting empty bodies and JSON `null`.
pub fn parse_body(operation: Operation, body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Err(Error::new(ErrorKind::InvalidBody {
            operation,
            message: "empty response body".to_string(),
        }));
    }

    let value: Value = serde_json::from_str(body).map_err(|e| from_json(operation, e))?;
    if value.is_null() {
        return Err(Error::new(ErrorKind::InvalidBody {
            operation,
            message: "response body is null".to_string(),
        }));
    }
    Ok(value)
}

/// Sanitize a response body before embedding it in an error message.
///
/// Redacts session ids and tokens, and truncates long bodies.
pub fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = SESSION_ID_PATTERN
        .replace_all(message, r#""$1":"[REDACTED]""#)
        .to_string();
    sanitized = BEARER_PATTERN
        .replace_all(&sanitized, "Bearer [REDACTED]")
        .to_string();

    if sanitized.len() > MAX_BODY_LENGTH {
        let mut end = MAX_BODY_LENGTH;
        while !sanitized.is_char_boundary(end) {
            end -= 1;
        }
        sanitized.truncate(end);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
