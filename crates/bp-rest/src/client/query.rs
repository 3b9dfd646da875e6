use serde_json::Value;
use tracing::instrument;

use billingplatform_client::translate;
use billingplatform_client::{Operation, RequestMethod, Result};

impl super::BillingPlatformRestClient {
    /// Execute a query and return the response body unmodified.
    ///
    /// The SQL is percent-encoded into the `sql` query parameter; it is not
    /// validated locally.
    #[instrument(skip(self))]
    pub async fn query(&self, sql: &str) -> Result<Value> {
        let view = self.session_view(Operation::Query).await?;
        let request = self
            .request(&view, Operation::Query, RequestMethod::Get, "query")
            .query("sql", sql);
        self.http().send_json(request).await
    }

    /// Execute a query and return the records of `queryResponse`.
    #[instrument(skip(self))]
    pub async fn query_records(&self, sql: &str) -> Result<Vec<Value>> {
        match self.query(sql).await? {
            Value::Object(mut body) => match body.remove("queryResponse") {
                Some(Value::Array(records)) => Ok(records),
                _ => Err(translate::missing_field(Operation::Query, "queryResponse")),
            },
            _ => Err(translate::missing_field(Operation::Query, "queryResponse")),
        }
    }
}
