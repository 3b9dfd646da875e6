//! The `BillingPlatform` client: one environment, one session.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use billingplatform_auth::{AuthenticationManager, ConnectionProfile, Credentials};
use billingplatform_client::{ClientConfig, Result};
use billingplatform_rest::{BillingPlatformRestClient, BulkResult};

/// Authenticated client for a BillingPlatform environment.
///
/// [`connect`](Self::connect) validates the configuration, logs in and
/// registers the shutdown logout. Call [`shutdown`](Self::shutdown) from the
/// application's own shutdown sequence; it logs out at most once, and not
/// at all if `logout_at_exit` is disabled.
///
/// # Example
///
/// ```rust,ignore
/// use billingplatform::{BillingPlatform, ClientConfig, Credentials};
///
/// let bp = BillingPlatform::connect(
///     "https://sandbox.billingplatform.com/myenv",
///     Credentials::password("user", "pass")?,
///     ClientConfig::default(),
/// )
/// .await?;
///
/// let accounts = bp.query("SELECT Id, Name FROM ACCOUNT").await?;
/// bp.shutdown().await;
/// ```
#[derive(Debug)]
pub struct BillingPlatform {
    auth: Arc<AuthenticationManager>,
    rest: BillingPlatformRestClient,
}

impl BillingPlatform {
    /// Create an unauthenticated client. Configuration errors surface here.
    pub fn new(
        base_url: impl AsRef<str>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let auth = Arc::new(AuthenticationManager::new(base_url, credentials, config)?);
        let rest = BillingPlatformRestClient::new(Arc::clone(&auth));
        Ok(Self { auth, rest })
    }

    /// Create a client and authenticate it.
    pub async fn connect(
        base_url: impl AsRef<str>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = Self::new(base_url, credentials, config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Connect with a [`ConnectionProfile`].
    pub async fn connect_profile(profile: ConnectionProfile, config: ClientConfig) -> Result<Self> {
        Self::connect(profile.base_url, profile.credentials, config).await
    }

    /// Connect with credentials from `BILLINGPLATFORM_*` environment variables.
    pub async fn from_env(config: ClientConfig) -> Result<Self> {
        Self::connect_profile(ConnectionProfile::from_env()?, config).await
    }

    /// Connect with the entry at `keys` of a JSON credentials file.
    pub async fn from_json_file(
        path: impl AsRef<Path>,
        keys: &[&str],
        config: ClientConfig,
    ) -> Result<Self> {
        Self::connect_profile(ConnectionProfile::from_json_file(path, keys)?, config).await
    }

    /// Get the authentication manager.
    pub fn auth(&self) -> &AuthenticationManager {
        &self.auth
    }

    /// Get the REST client.
    pub fn rest(&self) -> &BillingPlatformRestClient {
        &self.rest
    }

    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated().await
    }

    pub async fn authenticate(&self) -> Result<()> {
        self.auth.authenticate().await
    }

    pub async fn login(&self) -> Result<()> {
        self.auth.login().await
    }

    pub async fn oauth_login(&self) -> Result<()> {
        self.auth.oauth_login().await
    }

    pub async fn logout(&self) -> Result<()> {
        self.auth.logout().await
    }

    /// Fire the logout hook. Returns true if logout was attempted.
    pub async fn shutdown(&self) -> bool {
        let fired = self.auth.shutdown().await;
        if fired {
            debug!("Logout hook fired");
        }
        fired
    }

    pub async fn query(&self, sql: &str) -> Result<Value> {
        self.rest.query(sql).await
    }

    pub async fn query_records(&self, sql: &str) -> Result<Vec<Value>> {
        self.rest.query_records(sql).await
    }

    pub async fn retrieve_by_id(&self, entity: &str, record_id: &str) -> Result<Value> {
        self.rest.retrieve_by_id(entity, record_id).await
    }

    pub async fn retrieve_by_query(&self, entity: &str, ansi_filter: &str) -> Result<Value> {
        self.rest.retrieve_by_query(entity, ansi_filter).await
    }

    pub async fn create(&self, entity: &str, payload: &Value) -> Result<Value> {
        self.rest.create(entity, payload).await
    }

    pub async fn update(&self, entity: &str, payload: &Value) -> Result<Value> {
        self.rest.update(entity, payload).await
    }

    pub async fn upsert(&self, entity: &str, payload: &Value) -> Result<Value> {
        self.rest.upsert(entity, payload).await
    }

    pub async fn delete(&self, entity: &str, payload: &Value) -> Result<Value> {
        self.rest.delete(entity, payload).await
    }

    pub async fn undelete(&self, entity: &str, payload: &Value) -> Result<Value> {
        self.rest.undelete(entity, payload).await
    }

    pub async fn file_upload(&self, path: impl AsRef<Path>) -> Result<Value> {
        self.rest.file_upload(path).await
    }

    pub async fn file_download(&self, file_id: &str) -> Result<Vec<u8>> {
        self.rest.file_download(file_id).await
    }

    pub async fn bulk_request(&self, payload: &Value) -> Result<Vec<BulkResult>> {
        self.rest.bulk_request(payload).await
    }
}

impl Drop for BillingPlatform {
    fn drop(&mut self) {
        if self.auth.hook().is_pending() {
            let base_url = self.auth.try_base_url().unwrap_or_default();
            warn!(
                %base_url,
                "BillingPlatform dropped without shutdown; session was not logged out"
            );
        }
    }
}
