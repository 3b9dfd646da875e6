//! Session establishment and teardown against the fixture.

use std::io::Write;

use super::common::{connect, fixture_server, mount_logout, password, test_config, SESSION_ID};
use billingplatform::client::{AUTHORIZATION_HEADER, SESSION_HEADER};
use billingplatform::{BillingPlatform, Credentials, ErrorKind, Operation, TokenType};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_incomplete_credentials_are_config_errors() {
    let err = Credentials::from_parts(None, None, None, None, None).unwrap_err();
    assert!(err.is_config_error());

    let err = Credentials::from_parts(Some("blake"), None, None, Some("secret"), None).unwrap_err();
    assert!(err.is_config_error());
}

#[tokio::test]
async fn test_bad_base_url_is_config_error() {
    let err = BillingPlatform::new("localhost:5000 with spaces", password(), test_config())
        .unwrap_err();
    assert!(err.is_config_error());
}

#[tokio::test]
async fn test_password_login_and_logout() {
    let server = fixture_server().await;
    mount_logout(&server, 1).await;

    let bp = connect(&server).await;
    assert!(bp.is_authenticated().await);
    assert_eq!(
        bp.auth().session().await.transport_context().get(SESSION_HEADER),
        Some(SESSION_ID)
    );

    bp.logout().await.unwrap();
    assert!(!bp.is_authenticated().await);

    // Second logout is a no-op.
    bp.logout().await.unwrap();
    assert!(!bp.is_authenticated().await);
}

#[tokio::test]
async fn test_login_without_session_id_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/2.0/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loginResponse": [{"ErrorCode": "1", "ErrorText": "Invalid login"}]
        })))
        .mount(&server)
        .await;

    let err = BillingPlatform::connect(server.uri(), password(), test_config())
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Some(Operation::Login));
    assert!(matches!(err.kind, ErrorKind::MissingField { .. }));
}

#[tokio::test]
async fn test_login_rejected_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/2.0/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = BillingPlatform::connect(server.uri(), password(), test_config())
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Some(Operation::Login));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_oauth_connect() {
    let server = fixture_server().await;

    let bp = BillingPlatform::connect(
        server.uri(),
        Credentials::client_credentials("client", "secret", TokenType::RefreshToken).unwrap(),
        test_config(),
    )
    .await
    .unwrap();

    let session = bp.auth().session().await;
    assert!(session.is_authenticated());
    assert_eq!(
        session.transport_context().get(AUTHORIZATION_HEADER),
        Some("Bearer fixture-access-token")
    );
    assert!(session.has_refresh_token());

    // Bearer sessions reach the executor the same way.
    let body = bp.query("SELECT Id FROM accounts").await.unwrap();
    assert_eq!(body["queryResponse"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_connect_from_credentials_file() {
    let server = fixture_server().await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({
            "login": {"base_url": server.uri(), "username": "blake", "password": "passwd"},
            "oauth": {"base_url": server.uri(), "client_id": "client", "client_secret": "secret"}
        })
    )
    .unwrap();

    let bp = BillingPlatform::from_json_file(file.path(), &["login"], test_config())
        .await
        .unwrap();
    assert!(bp.auth().session().await.credentials().is_password());

    let bp = BillingPlatform::from_json_file(file.path(), &["oauth"], test_config())
        .await
        .unwrap();
    assert!(bp.auth().session().await.credentials().is_client_credentials());

    let err = BillingPlatform::from_json_file(file.path(), &["sandbox"], test_config())
        .await
        .unwrap_err();
    assert!(err.is_config_error());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let err = BillingPlatform::connect("http://127.0.0.1:9", password(), test_config())
        .await
        .unwrap_err();

    assert!(err.is_transport_error());
    assert_eq!(err.operation(), Some(Operation::Login));
}
