//! Typed response bodies.

use serde::{Deserialize, Serialize};

/// One entry of a bulk request's `createResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BulkResult {
    #[serde(rename = "ErrorCode", default)]
    pub error_code: String,
    #[serde(rename = "ErrorText", default)]
    pub error_text: String,
    #[serde(rename = "ErrorElementField", default)]
    pub error_element_field: String,
    #[serde(rename = "Id", default, deserialize_with = "string_or_number")]
    pub id: String,
}

impl BulkResult {
    /// The server reports success with error code `"0"`.
    pub fn is_success(&self) -> bool {
        self.error_code.trim() == "0"
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
