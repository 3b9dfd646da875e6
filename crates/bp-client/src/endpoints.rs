//! URL building for the BillingPlatform REST and auth APIs.

use crate::error::{Error, Result};
use crate::{AUTH_API_VERSION, REST_API_VERSION};

/// Base URL of a BillingPlatform environment plus the API URLs derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Validate and normalize a base URL. Trailing slashes are stripped.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::config("base URL must not be empty"));
        }

        let parsed = url::Url::parse(trimmed)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base URL must use http or https, got {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a REST API URL.
    ///
    /// Example: `rest_url("query")` -> `{base}/rest/2.0/query`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/rest/{}/{}", self.base_url, REST_API_VERSION, path)
    }

    /// Build an auth API URL.
    ///
    /// Example: `auth_url("authenticate")` -> `{base}/auth/1.0/authenticate`
    pub fn auth_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/auth/{}/{}", self.base_url, AUTH_API_VERSION, path)
    }

    /// Password login endpoint.
    pub fn login_url(&self) -> String {
        self.rest_url("login")
    }

    /// Logout endpoint.
    pub fn logout_url(&self) -> String {
        self.rest_url("logout")
    }

    /// OAuth token endpoint.
    pub fn oauth_url(&self) -> String {
        self.auth_url("authenticate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let endpoints = Endpoints::new("https://sandbox.billingplatform.com/myenv").unwrap();

        assert_eq!(
            endpoints.login_url(),
            "https://sandbox.billingplatform.com/myenv/rest/2.0/login"
        );
        assert_eq!(
            endpoints.logout_url(),
            "https://sandbox.billingplatform.com/myenv/rest/2.0/logout"
        );
        assert_eq!(
            endpoints.oauth_url(),
            "https://sandbox.billingplatform.com/myenv/auth/1.0/authenticate"
        );
        assert_eq!(
            endpoints.rest_url("/ACCOUNT/1"),
            "https://sandbox.billingplatform.com/myenv/rest/2.0/ACCOUNT/1"
        );
    }

    #[test]
    fn test_trailing_slash_handling() {
        let endpoints = Endpoints::new("http://localhost:5000///").unwrap();
        assert_eq!(endpoints.base_url(), "http://localhost:5000");
        assert_eq!(endpoints.rest_url("query"), "http://localhost:5000/rest/2.0/query");
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(Endpoints::new("").unwrap_err().is_config_error());
        assert!(Endpoints::new("not a url").unwrap_err().is_config_error());
        assert!(Endpoints::new("ftp://example.com").unwrap_err().is_config_error());
    }
}
