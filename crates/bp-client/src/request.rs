//! HTTP request building.

use std::collections::HashMap;

use bytes::Bytes;
use serde::Serialize;

use crate::context::TransportContext;
use crate::error::{Error, ErrorKind, Operation, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for HTTP requests.
///
/// Every request is tagged with the [`Operation`] it performs so transport
/// failures can be reported against it.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) operation: Operation,
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<RequestBody>,
}

/// Request body content.
#[derive(Debug)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(String),
    Multipart {
        field: String,
        file_name: String,
        content: Bytes,
    },
}

impl RequestBuilder {
    /// Create a new request builder.
    pub(crate) fn new(operation: Operation, method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// The operation this request performs.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The target URL, including any query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach every header of an authenticated transport context.
    pub fn context(mut self, context: &TransportContext) -> Self {
        for (name, value) in context.iter() {
            self.headers.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Append a percent-encoded query parameter to the URL.
    pub fn query(mut self, name: &str, value: &str) -> Self {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        self.url = format!(
            "{}{}{}={}",
            self.url,
            separator,
            urlencoding::encode(name),
            urlencoding::encode(value)
        );
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            Error::with_source(
                ErrorKind::InvalidInput {
                    operation: self.operation,
                    message: format!("payload is not serializable: {}", e),
                },
                e,
            )
        })?;
        self.body = Some(RequestBody::Json(value));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Set raw JSON body.
    pub fn json_value(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self
    }

    /// Set a form-encoded body.
    pub fn form<T: Serialize>(mut self, data: &T) -> Result<Self> {
        let encoded = serde_urlencoded::to_string(data).map_err(|e| {
            Error::with_source(
                ErrorKind::InvalidInput {
                    operation: self.operation,
                    message: format!("form body is not serializable: {}", e),
                },
                e,
            )
        })?;
        self.body = Some(RequestBody::Form(encoded));
        self.headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        Ok(self)
    }

    /// Set a single-file multipart body.
    pub fn multipart_file(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        self.body = Some(RequestBody::Multipart {
            field: field.into(),
            file_name: file_name.into(),
            content: content.into(),
        });
        self
    }
}
