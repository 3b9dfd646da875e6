//! # bp-rest
//!
//! BillingPlatform REST API client.
//!
//! ## Features
//!
//! - **Query** - SQL queries against `/rest/2.0/query`
//! - **Retrieve** - Records by id or by ANSI SQL filter
//! - **CRUD** - Create, update, upsert, delete, undelete
//! - **Files** - Multipart upload and raw download
//! - **Bulk** - Bulk API requests with typed per-record results
//!
//! Every call requires an authenticated session and is sent exactly once.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use billingplatform_auth::{AuthenticationManager, Credentials};
//! use billingplatform_client::ClientConfig;
//! use billingplatform_rest::BillingPlatformRestClient;
//! use serde_json::json;
//!
//! let auth = AuthenticationManager::new(
//!     "https://sandbox.billingplatform.com/myenv",
//!     Credentials::password("user", "pass")?,
//!     ClientConfig::default(),
//! )?;
//! auth.login().await?;
//!
//! let client = BillingPlatformRestClient::new(Arc::new(auth));
//! let accounts = client.query_records("SELECT Id, Name FROM ACCOUNT").await?;
//! let record = client.retrieve_by_id("ACCOUNT", "1").await?;
//! client.update("ACCOUNT", &json!({"brmObjects": {"Id": 1, "Name": "Renamed"}})).await?;
//! ```

mod client;
mod types;

pub use billingplatform_client::{Error, ErrorKind, Operation, Result};
pub use client::BillingPlatformRestClient;
pub use types::BulkResult;
