//! OAuth 2.0 client-credentials and refresh-token grants.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use billingplatform_client::translate;
use billingplatform_client::{Operation, Result};

use crate::credentials::ClientCredentials;

/// Form parameters for the client-credentials grant.
pub(crate) fn client_credentials_grant(creds: &ClientCredentials) -> [(&'static str, &str); 3] {
    [
        ("grant_type", "client_credentials"),
        ("client_id", creds.client_id()),
        ("client_secret", creds.client_secret()),
    ]
}

/// Form parameters for the refresh-token grant.
pub(crate) fn refresh_token_grant<'a>(
    creds: &'a ClientCredentials,
    refresh_token: &'a str,
) -> [(&'static str, &'a str); 4] {
    [
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", creds.client_id()),
        ("client_secret", creds.client_secret()),
    ]
}

/// Token response from `/auth/1.0/authenticate`.
///
/// Sensitive fields like `access_token` and `refresh_token` are redacted
/// in Debug output to prevent accidental exposure in logs.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    /// Access token.
    #[serde(default)]
    pub access_token: String,
    /// Refresh token (if issued).
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl TokenResponse {
    /// Parse a 200 body, requiring a non-empty `access_token`.
    pub(crate) fn from_body(body: serde_json::Value) -> Result<Self> {
        let token: TokenResponse = serde_json::from_value(body)
            .map_err(|e| translate::from_json(Operation::Login, e))?;
        if token.access_token.trim().is_empty() {
            return Err(translate::missing_field(Operation::Login, "access_token"));
        }
        Ok(token)
    }

    /// When the access token stops being valid, if the server said.
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
    }
}
