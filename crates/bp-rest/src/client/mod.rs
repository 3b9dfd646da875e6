//! BillingPlatform REST API client.
//!
//! This client wraps an [`AuthenticationManager`] from `bp-auth` and
//! provides methods for query, retrieve, CRUD, file and bulk operations.
//! Every call takes a fresh snapshot of the session, so a logout or token
//! refresh on another task is picked up by the next request.

use std::sync::Arc;

use serde_json::Value;

use billingplatform_auth::{AuthenticationManager, SessionView};
use billingplatform_client::security::url as url_security;
use billingplatform_client::{
    BpHttpClient, Error, Operation, RequestBuilder, RequestMethod, Result,
};

mod bulk;
mod crud;
mod files;
mod query;
mod retrieve;

/// BillingPlatform REST API client.
///
/// Provides methods for every REST operation:
/// - Queries and retrieval by id or ANSI filter
/// - Create, update, upsert, delete and undelete
/// - File upload and download
/// - Bulk API requests
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use billingplatform_rest::BillingPlatformRestClient;
///
/// let rest = BillingPlatformRestClient::new(Arc::new(auth));
///
/// let accounts = rest.query("SELECT Id, Name FROM ACCOUNT").await?;
/// let created = rest.create("ACCOUNT", &json!({"Name": "New Account"})).await?;
/// rest.delete("ACCOUNT", &json!({"Id": 4})).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BillingPlatformRestClient {
    auth: Arc<AuthenticationManager>,
}

impl BillingPlatformRestClient {
    /// Create a REST client that sends requests with `auth`'s session.
    pub fn new(auth: Arc<AuthenticationManager>) -> Self {
        Self { auth }
    }

    /// Get the authentication manager.
    pub fn auth(&self) -> &Arc<AuthenticationManager> {
        &self.auth
    }

    fn http(&self) -> &BpHttpClient {
        self.auth.http()
    }

    /// Snapshot the session, failing if it is not authenticated.
    async fn session_view(&self, operation: Operation) -> Result<SessionView> {
        self.auth.session_view(operation).await
    }

    /// Build an authenticated request for a path under `/rest/2.0/`.
    fn request(
        &self,
        view: &SessionView,
        operation: Operation,
        method: RequestMethod,
        path: &str,
    ) -> RequestBuilder {
        self.http()
            .request(operation, method, view.endpoints.rest_url(path))
            .context(&view.transport_context)
    }

    /// Send `payload` as the JSON body of an authenticated request.
    async fn send_payload(
        &self,
        operation: Operation,
        method: RequestMethod,
        path: &str,
        payload: &Value,
    ) -> Result<Value> {
        require_payload(operation, payload)?;
        let view = self.session_view(operation).await?;
        let request = self
            .request(&view, operation, method, path)
            .json_value(payload.clone());
        self.http().send_json(request).await
    }
}

fn require_entity(operation: Operation, entity: &str) -> Result<()> {
    if url_security::is_safe_entity_name(entity) {
        Ok(())
    } else {
        Err(Error::invalid_input(
            operation,
            format!("invalid entity name '{}'", entity),
        ))
    }
}

/// Reject `null`, `{}` and `[]`.
fn require_payload(operation: Operation, payload: &Value) -> Result<()> {
    let absent = match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if absent {
        Err(Error::invalid_input(operation, "payload must not be empty"))
    } else {
        Ok(())
    }
}
