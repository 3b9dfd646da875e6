//! # billingplatform
//!
//! A client library for the BillingPlatform REST API.
//!
//! The library establishes an authenticated session, attaches it to every
//! request, translates every failure into one [`Error`] tagged with the
//! operation in flight, and logs the session out when the owning
//! application shuts down.
//!
//! ## Security
//!
//! - Passwords, client secrets, session ids and tokens are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **billingplatform-client** - HTTP transport, configuration, error taxonomy
//! - **billingplatform-auth** - Password and OAuth login, logout, shutdown hook
//! - **billingplatform-rest** - Query, retrieve, CRUD, files, bulk
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billingplatform::{BillingPlatform, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), billingplatform::Error> {
//!     let bp = BillingPlatform::from_json_file(
//!         "credentials.json",
//!         &["login"],
//!         ClientConfig::default(),
//!     )
//!     .await?;
//!
//!     let records = bp.query_records("SELECT Id, Name FROM ACCOUNT").await?;
//!     for record in records {
//!         println!("{}", record["Name"]);
//!     }
//!
//!     bp.shutdown().await;
//!     Ok(())
//! }
//! ```

#[cfg(feature = "auth")]
pub use billingplatform_auth as auth;
#[cfg(feature = "client")]
pub use billingplatform_client as client;
#[cfg(feature = "rest")]
pub use billingplatform_rest as rest;

#[cfg(feature = "rest")]
mod platform;

#[cfg(feature = "rest")]
pub use platform::BillingPlatform;

#[cfg(feature = "auth")]
pub use billingplatform_auth::{
    AuthenticationManager, ConnectionProfile, Credentials, LogoutHook, Session, TokenType,
};
#[cfg(feature = "client")]
pub use billingplatform_client::{
    CertVerification, ClientConfig, Error, ErrorKind, Operation, Result, LOGOUT_AT_EXIT,
};
#[cfg(feature = "rest")]
pub use billingplatform_rest::{BillingPlatformRestClient, BulkResult};
