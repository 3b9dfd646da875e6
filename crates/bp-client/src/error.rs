//! Error types shared by every BillingPlatform crate.
//!
//! Every public operation either returns a validated success value or an
//! [`Error`] whose [`Operation`] names the call that was in flight.

use std::fmt;

/// Result type alias for BillingPlatform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The remote operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Logout,
    Query,
    Retrieve,
    Create,
    Update,
    Upsert,
    Delete,
    Undelete,
    FileUpload,
    FileDownload,
    Bulk,
}

impl Operation {
    /// Human-readable name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Login => "Login",
            Operation::Logout => "Logout",
            Operation::Query => "Query",
            Operation::Retrieve => "Retrieve",
            Operation::Create => "Create",
            Operation::Update => "Update",
            Operation::Upsert => "Upsert",
            Operation::Delete => "Delete",
            Operation::Undelete => "Undelete",
            Operation::FileUpload => "File upload",
            Operation::FileDownload => "File download",
            Operation::Bulk => "Bulk request",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for BillingPlatform operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Shorthand for a local input rejection.
    pub fn invalid_input(operation: Operation, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput {
            operation,
            message: message.into(),
        })
    }

    /// The operation that failed, if the error is tied to one.
    pub fn operation(&self) -> Option<Operation> {
        self.kind.operation()
    }

    /// HTTP status code of the failed response, if any.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns true if the call was refused because no session is active.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self.kind, ErrorKind::NotAuthenticated(_))
    }

    /// Returns true if the underlying network call failed.
    pub fn is_transport_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport { .. })
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid configuration, raised at construction.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An operation was attempted without an authenticated session.
    #[error("{0} requires an authenticated session")]
    NotAuthenticated(Operation),

    /// The request was rejected locally before being sent.
    #[error("{operation} rejected: {message}")]
    InvalidInput { operation: Operation, message: String },

    /// The remote API answered with a non-success status code.
    #[error("{operation} failed with status code: {status}, response: {body}")]
    Status {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// A success response did not carry the expected field.
    #[error("{operation} response did not contain {field}")]
    MissingField {
        operation: Operation,
        field: String,
    },

    /// The response body was empty or not valid JSON.
    #[error("{operation} returned an invalid body: {message}")]
    InvalidBody {
        operation: Operation,
        message: String,
    },

    /// Network failure (connection, TLS, timeout).
    #[error("{operation} failed: {message}")]
    Transport {
        operation: Operation,
        message: String,
    },
}

impl ErrorKind {
    /// The operation this error kind is tied to.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ErrorKind::Config(_) => None,
            ErrorKind::NotAuthenticated(operation)
            | ErrorKind::InvalidInput { operation, .. }
            | ErrorKind::Status { operation, .. }
            | ErrorKind::MissingField { operation, .. }
            | ErrorKind::InvalidBody { operation, .. }
            | ErrorKind::Transport { operation, .. } => Some(*operation),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
