//! # bp-auth
//!
//! Session lifecycle for the BillingPlatform REST API.
//!
//! ## Security
//!
//! - Passwords, client secrets and tokens are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error bodies are sanitized before they reach error messages
//!
//! ## Supported Authentication Methods
//!
//! - **Username/password** - `/rest/2.0/login`, session id sent as `sessionid`
//! - **OAuth 2.0 client credentials** - `/auth/1.0/authenticate`, bearer token
//! - **OAuth 2.0 refresh token** - renews expiring bearer tokens
//!
//! ## Example
//!
//! ```rust,ignore
//! use billingplatform_auth::{AuthenticationManager, ConnectionProfile};
//! use billingplatform_client::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), billingplatform_auth::Error> {
//!     let profile = ConnectionProfile::from_json_file("credentials.json", &["login"])?;
//!     let auth = AuthenticationManager::from_profile(profile, ClientConfig::default())?;
//!
//!     auth.authenticate().await?;
//!     // ...
//!     auth.shutdown().await;
//!     Ok(())
//! }
//! ```

mod credentials;
mod hook;
mod login;
mod manager;
mod oauth;
mod session;

pub use billingplatform_client::{Error, ErrorKind, Operation, Result};
pub use credentials::{
    ClientCredentials, ConnectionProfile, Credentials, PasswordCredentials, TokenType,
};
pub use hook::LogoutHook;
pub use manager::AuthenticationManager;
pub use oauth::TokenResponse;
pub use session::{Session, SessionView, REFRESH_MARGIN_SECS};
