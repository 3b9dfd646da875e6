//! Logout-at-shutdown behaviour.

use super::common::{connect, fixture_server, mount_logout, password, SESSION_ID};
use billingplatform::{BillingPlatform, ClientConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_shutdown_logs_out_once() {
    let server = fixture_server().await;
    Mock::given(method("POST"))
        .and(path("/rest/2.0/logout"))
        .and(header("sessionid", SESSION_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"logoutResponse": []})))
        .expect(1)
        .mount(&server)
        .await;

    let bp = connect(&server).await;
    assert!(bp.shutdown().await);
    assert!(!bp.shutdown().await);
    assert!(!bp.is_authenticated().await);
}

#[tokio::test]
async fn test_registering_twice_logs_out_once() {
    let server = fixture_server().await;
    mount_logout(&server, 1).await;

    let bp = connect(&server).await;
    // A second login registers the hook again; it must stay a single hook.
    bp.login().await.unwrap();
    assert!(!bp.auth().register_exit_hook());

    bp.shutdown().await;
    bp.shutdown().await;
}

#[tokio::test]
async fn test_manual_logout_before_shutdown() {
    let server = fixture_server().await;
    mount_logout(&server, 1).await;

    let bp = connect(&server).await;
    bp.logout().await.unwrap();
    bp.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_swallows_logout_failure() {
    let server = fixture_server().await;
    Mock::given(method("POST"))
        .and(path("/rest/2.0/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("logout exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let bp = connect(&server).await;
    assert!(bp.shutdown().await);
    assert!(!bp.is_authenticated().await);
}

#[tokio::test]
async fn test_logout_at_exit_disabled() {
    let server = fixture_server().await;
    mount_logout(&server, 1).await;

    let config = ClientConfig::builder().with_logout_at_exit(false).build();
    let bp = BillingPlatform::connect(server.uri(), password(), config)
        .await
        .unwrap();

    assert!(!bp.auth().hook().is_registered());
    assert!(!bp.shutdown().await);
    assert!(bp.is_authenticated().await);

    // The caller logs out manually instead.
    bp.logout().await.unwrap();
}

#[tokio::test]
async fn test_failed_login_registers_nothing() {
    let server = wiremock::MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/2.0/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_logout(&server, 0).await;

    let bp = BillingPlatform::new(server.uri(), password(), ClientConfig::default()).unwrap();
    assert!(bp.login().await.is_err());
    assert!(!bp.auth().hook().is_registered());
    assert!(!bp.shutdown().await);
}
