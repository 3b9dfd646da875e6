use serde_json::Value;
use tracing::instrument;

use billingplatform_client::{Operation, RequestMethod, Result};

use super::require_entity;

impl super::BillingPlatformRestClient {
    /// Create records: POST `/rest/2.0/{entity}`.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, entity: &str, payload: &Value) -> Result<Value> {
        require_entity(Operation::Create, entity)?;
        self.send_payload(Operation::Create, RequestMethod::Post, entity, payload)
            .await
    }

    /// Update records: PUT `/rest/2.0/{entity}`.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, entity: &str, payload: &Value) -> Result<Value> {
        require_entity(Operation::Update, entity)?;
        self.send_payload(Operation::Update, RequestMethod::Put, entity, payload)
            .await
    }

    /// Insert or update records: PATCH `/rest/2.0/{entity}`.
    #[instrument(skip(self, payload))]
    pub async fn upsert(&self, entity: &str, payload: &Value) -> Result<Value> {
        require_entity(Operation::Upsert, entity)?;
        self.send_payload(Operation::Upsert, RequestMethod::Patch, entity, payload)
            .await
    }

    /// Delete records: DELETE `/rest/2.0/delete/{entity}` with the payload as body.
    #[instrument(skip(self, payload))]
    pub async fn delete(&self, entity: &str, payload: &Value) -> Result<Value> {
        require_entity(Operation::Delete, entity)?;
        let path = format!("delete/{}", entity);
        self.send_payload(Operation::Delete, RequestMethod::Delete, &path, payload)
            .await
    }

    /// Restore deleted records: DELETE `/rest/2.0/undelete/{entity}`.
    #[instrument(skip(self, payload))]
    pub async fn undelete(&self, entity: &str, payload: &Value) -> Result<Value> {
        require_entity(Operation::Undelete, entity)?;
        let path = format!("undelete/{}", entity);
        self.send_payload(Operation::Undelete, RequestMethod::Delete, &path, payload)
            .await
    }
}
