use serde_json::Value;
use tracing::{debug, instrument};

use billingplatform_client::translate;
use billingplatform_client::{Operation, RequestMethod, Result};

use crate::types::BulkResult;

impl super::BillingPlatformRestClient {
    /// Submit a bulk API request and return its per-record results.
    #[instrument(skip(self, payload))]
    pub async fn bulk_request(&self, payload: &Value) -> Result<Vec<BulkResult>> {
        let mut body = self
            .send_payload(Operation::Bulk, RequestMethod::Post, "bulk_api_request", payload)
            .await?;

        let results = body
            .get_mut("createResponse")
            .map(Value::take)
            .ok_or_else(|| translate::missing_field(Operation::Bulk, "createResponse"))?;
        let results: Vec<BulkResult> =
            serde_json::from_value(results).map_err(|e| translate::from_json(Operation::Bulk, e))?;

        let failed = results.iter().filter(|r| !r.is_success()).count();
        debug!(total = results.len(), failed, "Bulk request completed");
        Ok(results)
    }
}
