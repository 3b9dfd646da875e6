//! Request execution against the three-account fixture.

use super::common::{accounts, connect, fixture_server, mount_logout, password, test_config};
use billingplatform::{BillingPlatform, ErrorKind, Operation};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_query_returns_fixture_unmodified() {
    let server = fixture_server().await;
    let bp = connect(&server).await;

    let body = bp.query("SELECT * FROM ACCOUNTS WHERE 1=1").await.unwrap();
    assert_eq!(body, json!({"queryResponse": accounts()}));

    let records = bp.query_records("SELECT Id FROM ACCOUNTS").await.unwrap();
    assert_eq!(records, accounts());
}

#[tokio::test]
async fn test_retrieve_by_id() {
    let server = fixture_server().await;
    let bp = connect(&server).await;

    let body = bp.retrieve_by_id("accounts", "1").await.unwrap();
    assert_eq!(body["retrieveResponse"], accounts()[0]);

    let body = bp.retrieve_by_id("accounts", "99").await.unwrap();
    assert_eq!(body, json!({"retrieveResponse": {}}));
}

#[tokio::test]
async fn test_retrieve_by_query() {
    let server = fixture_server().await;
    Mock::given(method("GET"))
        .and(path("/rest/2.0/accounts"))
        .and(query_param("queryAnsiSql", "Status = 'ACTIVE'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "retrieveResponse": &accounts()[..2]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bp = connect(&server).await;
    let body = bp
        .retrieve_by_query("accounts", "Status = 'ACTIVE'")
        .await
        .unwrap();

    assert_eq!(body["retrieveResponse"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_write_operations() {
    let server = fixture_server().await;
    for (verb, route, key) in [
        ("POST", "/rest/2.0/accounts", "createResponse"),
        ("PUT", "/rest/2.0/accounts", "updateResponse"),
        ("PATCH", "/rest/2.0/accounts", "upsertResponse"),
        ("DELETE", "/rest/2.0/delete/accounts", "deleteResponse"),
        ("DELETE", "/rest/2.0/undelete/accounts", "deleteResponse"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({key: {"entity": "accounts"}})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let bp = connect(&server).await;
    let payload = json!({"brmObjects": {"Id": 4, "Name": "Umbrella"}});

    assert!(bp.create("accounts", &payload).await.unwrap()["createResponse"].is_object());
    assert!(bp.update("accounts", &payload).await.unwrap()["updateResponse"].is_object());
    assert!(bp.upsert("accounts", &payload).await.unwrap()["upsertResponse"].is_object());
    assert!(bp.delete("accounts", &payload).await.unwrap()["deleteResponse"].is_object());
    assert!(bp.undelete("accounts", &payload).await.unwrap()["deleteResponse"].is_object());
}

#[tokio::test]
async fn test_bulk_request() {
    let server = fixture_server().await;
    Mock::given(method("POST"))
        .and(path("/rest/2.0/bulk_api_request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "createResponse": [{
                "ErrorCode": "0",
                "ErrorText": " ",
                "ErrorElementField": " ",
                "Id": "8675309"
            }]
        })))
        .mount(&server)
        .await;

    let bp = connect(&server).await;
    let results = bp
        .bulk_request(&json!({"brmObjects": {"EntityName": "accounts"}}))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "8675309");
}

#[tokio::test]
async fn test_every_endpoint_reports_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/2.0/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loginResponse": [{"SessionID": "s"}]
        })))
        .mount(&server)
        .await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .with_priority(10)
        .mount(&server)
        .await;

    let bp = BillingPlatform::connect(server.uri(), password(), test_config())
        .await
        .unwrap();
    let payload = json!({"brmObjects": {"Id": 1}});
    let file = tempfile::NamedTempFile::new().unwrap();

    let results = vec![
        (Operation::Query, bp.query("SELECT Id FROM accounts").await.map(drop)),
        (Operation::Retrieve, bp.retrieve_by_id("accounts", "1").await.map(drop)),
        (Operation::Retrieve, bp.retrieve_by_query("accounts", "1=1").await.map(drop)),
        (Operation::Create, bp.create("accounts", &payload).await.map(drop)),
        (Operation::Update, bp.update("accounts", &payload).await.map(drop)),
        (Operation::Upsert, bp.upsert("accounts", &payload).await.map(drop)),
        (Operation::Delete, bp.delete("accounts", &payload).await.map(drop)),
        (Operation::Undelete, bp.undelete("accounts", &payload).await.map(drop)),
        (Operation::FileUpload, bp.file_upload(file.path()).await.map(drop)),
        (Operation::FileDownload, bp.file_download("1").await.map(drop)),
        (Operation::Bulk, bp.bulk_request(&payload).await.map(drop)),
        (Operation::Logout, bp.logout().await),
    ];

    for (operation, result) in results {
        let err = result.unwrap_err();
        assert_eq!(err.operation(), Some(operation));
        assert_eq!(err.status(), Some(503));
        assert!(
            err.to_string().contains("503"),
            "{} error should carry the status: {}",
            operation,
            err
        );
    }
}

#[tokio::test]
async fn test_requests_after_logout_are_refused() {
    let server = fixture_server().await;
    mount_logout(&server, 1).await;

    let bp = connect(&server).await;
    bp.logout().await.unwrap();

    let err = bp.query("SELECT Id FROM accounts").await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotAuthenticated(Operation::Query)));

    let err = bp.retrieve_by_id("accounts", "1").await.unwrap_err();
    assert!(err.is_not_authenticated());
}
