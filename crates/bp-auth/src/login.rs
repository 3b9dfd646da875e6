//! Request and response bodies of the password login endpoint.

use serde::{Deserialize, Serialize};

use billingplatform_client::translate;
use billingplatform_client::{Operation, Result};

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
struct LoginEnvelope {
    #[serde(rename = "loginResponse")]
    login_response: Option<Vec<LoginResult>>,
}

#[derive(Deserialize)]
struct LoginResult {
    #[serde(rename = "SessionID")]
    session_id: Option<String>,
}

/// Extract `loginResponse[0].SessionID` from a 200 login body.
pub(crate) fn session_id(body: serde_json::Value) -> Result<String> {
    let envelope: LoginEnvelope =
        serde_json::from_value(body).map_err(|e| translate::from_json(Operation::Login, e))?;

    let first = envelope
        .login_response
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| translate::missing_field(Operation::Login, "loginResponse"))?;

    first
        .session_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| translate::missing_field(Operation::Login, "SessionID"))
}
