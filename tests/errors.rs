//! Error mapping tests.

use std::time::Duration;

use daizy::{ClientOption, CreateProjectRequest, DaizyClient, DaizyError, Method, NO_BODY};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NUMERIC_ERROR: &str = r#"{
  "success": false,
  "errors": [
    {
      "field": "deviceId",
      "type": "NUMERIC",
      "message": "A numeric value is required"
    }
  ]
}"#;

fn client_for(server: &MockServer) -> DaizyClient {
    DaizyClient::new(
        "12345",
        "testtoken",
        [
            ClientOption::BaseUrl(server.uri()),
            ClientOption::BasePath(String::new()),
        ],
    )
    .unwrap()
}

async fn mount_any(server: &MockServer, template: ResponseTemplate) {
    Mock::given(wiremock::matchers::any())
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_non_200_responses() {
    let cases: [(u16, &str); 3] = [
        (400, "A numeric value is required"),
        (404, "A numeric value is required"),
        (500, "A numeric value is required"),
    ];

    for (status, message) in cases {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organisation/12345/project/1"))
            .respond_with(ResponseTemplate::new(status).set_body_string(NUMERIC_ERROR))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.get_project(1).await.unwrap_err();

        match err {
            DaizyError::Response(re) => {
                assert_eq!(re.to_string(), message);
                assert_eq!(re.status, status);
                assert!(!re.success);
                assert_eq!(re.errors[0].field, "deviceId");
                assert_eq!(re.errors[0].error_type, "NUMERIC");
            }
            other => panic!("error was not a ResponseError: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_every_operation_maps_service_errors() {
    let mock_server = MockServer::start().await;
    mount_any(
        &mock_server,
        ResponseTemplate::new(400).set_body_string(NUMERIC_ERROR),
    )
    .await;

    let client = client_for(&mock_server);
    let request = CreateProjectRequest::new("aProject", 444);

    let errors = [
        client.get_projects().await.unwrap_err(),
        client.get_project(1).await.unwrap_err(),
        client.create_project(&request).await.unwrap_err(),
        client
            .update_project(1, &daizy::UpdateProjectRequest::new("aProject", 444))
            .await
            .unwrap_err(),
        client.delete_project(1).await.unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.to_string(), "A numeric value is required");
        assert_eq!(err.status(), Some(400));
    }
}

#[tokio::test]
async fn test_non_200_success_status_is_still_an_error() {
    let mock_server = MockServer::start().await;
    mount_any(
        &mock_server,
        ResponseTemplate::new(201).set_body_string(NUMERIC_ERROR),
    )
    .await;

    let client = client_for(&mock_server);
    let err = client.get_project(1).await.unwrap_err();
    assert_eq!(err.status(), Some(201));
}

#[tokio::test]
async fn test_undecodable_error_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    mount_any(
        &mock_server,
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let client = client_for(&mock_server);
    let err = client.get_project(1).await.unwrap_err();
    assert!(matches!(err, DaizyError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    mount_any(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})),
    )
    .await;

    let client = client_for(&mock_server);
    let err = client.get_project(1).await.unwrap_err();
    assert!(matches!(err, DaizyError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_raw_request_returns_body_bytes() {
    let mock_server = MockServer::start().await;
    mount_any(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"{"anything":1}"#),
    )
    .await;

    let client = client_for(&mock_server);
    let raw = client
        .request_raw(Method::GET, "/whatever", NO_BODY)
        .await
        .unwrap();
    assert_eq!(raw, br#"{"anything":1}"#.to_vec());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind and drop a listener to get a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DaizyClient::new(
        "12345",
        "testtoken",
        [ClientOption::BaseUrl(format!("http://{addr}"))],
    )
    .unwrap();

    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, DaizyError::Http(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;
    mount_any(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"projects": [], "total": 0}))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let client = client_for(&mock_server).with_timeout(Duration::from_millis(100));
    let err = client.get_projects().await.unwrap_err();

    match err {
        DaizyError::Http(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_zero_timeout_means_no_deadline() {
    let mock_server = MockServer::start().await;
    mount_any(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"projects": [], "total": 0}))
            .set_delay(Duration::from_millis(200)),
    )
    .await;

    let client = DaizyClient::new(
        "12345",
        "testtoken",
        [
            ClientOption::BaseUrl(mock_server.uri()),
            ClientOption::BasePath(String::new()),
            ClientOption::Timeout(Duration::ZERO),
        ],
    )
    .unwrap();
    let projects = client.get_projects().await.unwrap();
    assert!(projects.is_empty());

    let projects = client_for(&mock_server)
        .with_timeout(Duration::ZERO)
        .get_projects()
        .await
        .unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_invalid_base_url_is_url_error() {
    let client = DaizyClient::new(
        "12345",
        "testtoken",
        [ClientOption::BaseUrl("not a url".to_string())],
    )
    .unwrap();

    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, DaizyError::Url(_)), "got {err:?}");
}
