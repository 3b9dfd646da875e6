//! # bp-client
//!
//! Core HTTP client infrastructure for the BillingPlatform REST API.
//!
//! This crate provides the foundation the auth and REST crates build on:
//! - Single-shot HTTP transport (no retries, no caching)
//! - TLS verification modes (default roots, disabled, custom CA bundle)
//! - Authenticated transport context attached to every request
//! - A uniform error taxonomy and the translator that produces it
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │           (billingplatform-auth, billingplatform-rest)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          Endpoints + TransportContext + RequestBuilder      │
//! │  - Builds /rest/2.0 and /auth/1.0 URLs                      │
//! │  - Attaches session / bearer headers                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    BpHttpClient                             │
//! │  - Raw HTTP, one attempt per call                           │
//! │  - Outcomes translated into Error { kind, source }          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use billingplatform_client::{
//!     BpHttpClient, ClientConfig, Endpoints, Operation, RequestMethod, TransportContext,
//! };
//!
//! let http = BpHttpClient::new(ClientConfig::default())?;
//! let endpoints = Endpoints::new("https://sandbox.billingplatform.com/myenv")?;
//! let ctx = TransportContext::session("session-id");
//!
//! let body = http
//!     .send_json(
//!         http.request(Operation::Query, RequestMethod::Get, endpoints.rest_url("query"))
//!             .query("sql", "SELECT Id FROM ACCOUNT")
//!             .context(&ctx),
//!     )
//!     .await?;
//! ```

mod client;
mod config;
mod context;
mod endpoints;
mod error;
mod request;
mod response;
pub mod security;
pub mod translate;

pub use client::BpHttpClient;
pub use config::{CertVerification, ClientConfig, ClientConfigBuilder};
pub use context::{TransportContext, AUTHORIZATION_HEADER, SESSION_HEADER};
pub use endpoints::Endpoints;
pub use error::{Error, ErrorKind, Operation, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::Response;

/// REST API version used in `/rest/{version}/...` paths.
pub const REST_API_VERSION: &str = "2.0";

/// Auth API version used in `/auth/{version}/...` paths.
pub const AUTH_API_VERSION: &str = "1.0";

/// Default for [`ClientConfig::logout_at_exit`].
pub const LOGOUT_AT_EXIT: bool = true;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("billingplatform-rs/", env!("CARGO_PKG_VERSION"));
