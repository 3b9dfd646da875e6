use serde_json::Value;
use tracing::instrument;

use billingplatform_client::security::url as url_security;
use billingplatform_client::{Error, Operation, RequestMethod, Result};

use super::require_entity;

impl super::BillingPlatformRestClient {
    /// Retrieve a single record by id.
    ///
    /// The id is percent-encoded into the path. An unknown id is whatever the
    /// server returns for it, typically `{"retrieveResponse": {}}`.
    #[instrument(skip(self))]
    pub async fn retrieve_by_id(&self, entity: &str, record_id: &str) -> Result<Value> {
        let path = url_security::entity_path(entity, record_id).ok_or_else(|| {
            Error::invalid_input(
                Operation::Retrieve,
                format!("invalid entity '{}' or empty record id", entity),
            )
        })?;

        let view = self.session_view(Operation::Retrieve).await?;
        let request = self.request(&view, Operation::Retrieve, RequestMethod::Get, &path);
        self.http().send_json(request).await
    }

    /// Retrieve the records of `entity` matching an ANSI SQL filter.
    #[instrument(skip(self))]
    pub async fn retrieve_by_query(&self, entity: &str, ansi_filter: &str) -> Result<Value> {
        require_entity(Operation::Retrieve, entity)?;

        let view = self.session_view(Operation::Retrieve).await?;
        let request = self
            .request(&view, Operation::Retrieve, RequestMethod::Get, entity)
            .query("queryAnsiSql", ansi_filter);
        self.http().send_json(request).await
    }
}
