//! Credential types and loading.
//!
//! All credential types implement custom Debug to redact sensitive data.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use billingplatform_client::{Error, ErrorKind, Result};

/// Which OAuth token lifetime a client-credentials session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenType {
    /// Use the access token until it expires; no refresh.
    #[default]
    AccessToken,
    /// Keep the refresh token and renew the access token before it expires.
    RefreshToken,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::AccessToken => "access_token",
            TokenType::RefreshToken => "refresh_token",
        }
    }
}

impl FromStr for TokenType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "access_token" => Ok(TokenType::AccessToken),
            "refresh_token" => Ok(TokenType::RefreshToken),
            other => Err(Error::config(format!(
                "token_type must be access_token or refresh_token, got '{}'",
                other
            ))),
        }
    }
}

/// Username/password credentials for `/rest/2.0/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl PasswordCredentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

/// OAuth client credentials for `/auth/1.0/authenticate`.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    token_type: TokenType,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

impl ClientCredentials {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }
}

/// The credential set a client authenticates with. Exactly one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Password(PasswordCredentials),
    ClientCredentials(ClientCredentials),
}

impl Credentials {
    /// Username/password credentials. Both values must be non-empty.
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() || password.is_empty() {
            return Err(Error::config("username and password must both be provided"));
        }
        Ok(Credentials::Password(PasswordCredentials { username, password }))
    }

    /// OAuth client credentials. Id and secret must be non-empty.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_type: TokenType,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() || client_secret.is_empty() {
            return Err(Error::config(
                "client_id and client_secret must both be provided",
            ));
        }
        Ok(Credentials::ClientCredentials(ClientCredentials {
            client_id,
            client_secret,
            token_type,
        }))
    }

    /// Pick a strategy from optional parts.
    ///
    /// A complete username/password pair wins; otherwise a complete client
    /// id/secret pair is used. Anything else is a configuration error.
    pub fn from_parts(
        username: Option<&str>,
        password: Option<&str>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
        token_type: Option<TokenType>,
    ) -> Result<Self> {
        if let (Some(username), Some(password)) = (present(username), present_secret(password)) {
            if present(client_id).is_some() {
                debug!("Both credential sets supplied; using username/password");
            }
            return Self::password(username, password);
        }

        if let (Some(client_id), Some(client_secret)) =
            (present(client_id), present_secret(client_secret))
        {
            let token_type = token_type.unwrap_or_default();
            return Self::client_credentials(client_id, client_secret, token_type);
        }

        Err(Error::config(
            "Either username/password or client_id/client_secret must be provided",
        ))
    }

    /// Returns true for the username/password strategy.
    pub fn is_password(&self) -> bool {
        matches!(self, Credentials::Password(_))
    }

    /// Returns true for the OAuth client-credentials strategy.
    pub fn is_client_credentials(&self) -> bool {
        matches!(self, Credentials::ClientCredentials(_))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Secrets are used as given; only an empty one counts as missing.
fn present_secret(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// A base URL and the credentials to use against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub base_url: String,
    pub credentials: Credentials,
}

#[derive(Deserialize)]
struct RawProfile {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    token_type: Option<String>,
}

impl RawProfile {
    fn into_profile(self) -> Result<ConnectionProfile> {
        let base_url = self
            .base_url
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::config("base_url must be provided"))?;
        let token_type = self.token_type.as_deref().map(TokenType::from_str).transpose()?;
        let credentials = Credentials::from_parts(
            self.username.as_deref(),
            self.password.as_deref(),
            self.client_id.as_deref(),
            self.client_secret.as_deref(),
            token_type,
        )?;
        Ok(ConnectionProfile {
            base_url,
            credentials,
        })
    }
}

impl ConnectionProfile {
    /// Load a profile from environment variables.
    ///
    /// Required: `BILLINGPLATFORM_BASE_URL`, and either
    /// `BILLINGPLATFORM_USERNAME` + `BILLINGPLATFORM_PASSWORD` or
    /// `BILLINGPLATFORM_CLIENT_ID` + `BILLINGPLATFORM_CLIENT_SECRET`.
    ///
    /// Optional: `BILLINGPLATFORM_TOKEN_TYPE` (`access_token` or `refresh_token`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        RawProfile {
            base_url: lookup("BILLINGPLATFORM_BASE_URL"),
            username: lookup("BILLINGPLATFORM_USERNAME"),
            password: lookup("BILLINGPLATFORM_PASSWORD"),
            client_id: lookup("BILLINGPLATFORM_CLIENT_ID"),
            client_secret: lookup("BILLINGPLATFORM_CLIENT_SECRET"),
            token_type: lookup("BILLINGPLATFORM_TOKEN_TYPE"),
        }
        .into_profile()
    }

    /// Load a profile from a JSON credentials file, descending through `keys`.
    ///
    /// ```json
    /// {
    ///     "login": {"base_url": "...", "username": "...", "password": "..."},
    ///     "oauth": {"base_url": "...", "client_id": "...", "client_secret": "..."}
    /// }
    /// ```
    ///
    /// `from_json_file("credentials.json", &["login"])` selects the first entry.
    pub fn from_json_file(path: impl AsRef<Path>, keys: &[&str]) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("cannot read {}: {}", path.display(), e)),
                e,
            )
        })?;
        let mut value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("invalid JSON in {}: {}", path.display(), e)),
                e,
            )
        })?;

        for key in keys {
            value = value
                .get_mut(*key)
                .map(serde_json::Value::take)
                .ok_or_else(|| {
                    Error::config(format!("Key '{}' not found in credentials file", key))
                })?;
        }

        let raw: RawProfile = serde_json::from_value(value).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("invalid credentials entry: {}", e)),
                e,
            )
        })?;
        raw.into_profile()
    }
}
