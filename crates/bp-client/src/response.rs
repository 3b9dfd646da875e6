//! HTTP response handling.

use crate::error::{Operation, Result};
use crate::translate;

/// Wrapper around an HTTP response, tagged with the operation that produced it.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
    operation: Operation,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response, operation: Operation) -> Self {
        Self { inner, operation }
    }

    /// The operation this response answers.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true only for HTTP 200, the API's sole success status.
    pub fn is_ok(&self) -> bool {
        self.status() == 200
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        let operation = self.operation;
        self.inner
            .text()
            .await
            .map_err(|e| translate::from_transport(operation, e))
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        let operation = self.operation;
        self.inner
            .bytes()
            .await
            .map_err(|e| translate::from_transport(operation, e))
    }
}
