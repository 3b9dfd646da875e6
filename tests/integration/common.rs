use billingplatform::{BillingPlatform, ClientConfig, Credentials};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_ID: &str = "fixture-session";

/// Install a test subscriber once; filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn accounts() -> Vec<Value> {
    vec![
        json!({"Id": 1, "Name": "Acme Corp", "Status": "ACTIVE"}),
        json!({"Id": 2, "Name": "Globex", "Status": "ACTIVE"}),
        json!({"Id": 3, "Name": "Initech", "Status": "INACTIVE"}),
    ]
}

pub fn test_config() -> ClientConfig {
    ClientConfig::builder().with_tracing(true).build()
}

/// A fixture server with login, query and retrieve endpoints over three
/// account records. Logout is left to each test so it can count calls.
pub async fn fixture_server() -> MockServer {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/2.0/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loginResponse": [{"ErrorCode": "0", "ErrorText": " ", "SessionID": SESSION_ID}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/1.0/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fixture-access-token",
            "refresh_token": "fixture-refresh-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/2.0/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"queryResponse": accounts()})),
        )
        .mount(&server)
        .await;

    for record in accounts() {
        Mock::given(method("GET"))
            .and(path(format!("/rest/2.0/accounts/{}", record["Id"])))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"retrieveResponse": record})),
            )
            .mount(&server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path_regex(r"^/rest/2\.0/accounts/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"retrieveResponse": {}})))
        .with_priority(10)
        .mount(&server)
        .await;

    server
}

pub async fn mount_logout(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/rest/2.0/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logoutResponse": [{"ErrorCode": "0", "ErrorText": " "}]
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn password() -> Credentials {
    Credentials::password("blake", "passwd").expect("valid credentials")
}

pub async fn connect(server: &MockServer) -> BillingPlatform {
    BillingPlatform::connect(server.uri(), password(), test_config())
        .await
        .expect("login against fixture should succeed")
}
