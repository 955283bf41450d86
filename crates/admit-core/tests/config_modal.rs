//! Configuration modal driven over HTTP

use std::time::Duration;

use admit_core::api::{HttpApi, Session};
use admit_core::category::Category;
use admit_core::controller::{ConfigController, ModalState, SaveOutcome};
use admit_core::error::AdmitError;
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

async fn server_with_year() -> MockServer {
    let server = MockServer::start().await;
    let catalogs = [
        (
            "/criteria",
            json!([
                {"criteriaId": "A", "criteriaName": "Academic"},
                {"criteriaId": "B", "criteriaName": "Athletic"}
            ]),
        ),
        ("/majors", json!([{"majorId": "M1", "majorName": "Math"}])),
        ("/objects", json!([])),
        ("/regions", json!([])),
    ];
    for (path, body) in catalogs {
        Mock::given(matchers::method("GET"))
            .and(matchers::path(path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/admission-years/2025/config"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"criteria": [{"criteriaId": "A"}]})),
        )
        .mount(&server)
        .await;
    server
}

fn api(server: &MockServer) -> HttpApi {
    HttpApi::new(&server.uri(), Session::anonymous(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_save_failure_then_retry_resubmits_identical_payload() {
    let server = server_with_year().await;
    let expected = json!({
        "criteriaIds": ["A", "B"],
        "majorIds": [],
        "objectIds": [],
        "regionIds": []
    });
    Mock::given(matchers::method("PUT"))
        .and(matchers::path("/admission-years/2025/config"))
        .and(matchers::body_json(expected.clone()))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(matchers::method("PUT"))
        .and(matchers::path("/admission-years/2025/config"))
        .and(matchers::body_json(expected))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let mut controller = ConfigController::new(Duration::from_secs(5));
    controller.open(&api, "2025").await.unwrap();
    controller.toggle_all(Category::Criteria).unwrap();
    let edited = controller.selection().clone();

    let err = controller.save(&api).await.unwrap_err();
    assert!(matches!(err, AdmitError::SaveFailed { .. }));
    assert_eq!(controller.state(), ModalState::Ready);
    assert_eq!(controller.selection(), &edited);
    assert!(controller.error().is_some());

    let outcome = controller.save(&api).await.unwrap();
    assert_eq!(
        outcome,
        SaveOutcome::Saved {
            year_id: "2025".to_string()
        }
    );
    assert_eq!(controller.state(), ModalState::Closed);
}

#[tokio::test]
async fn test_unauthorized_catalog_fails_open() {
    let server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut controller = ConfigController::default();
    let err = controller.open(&api(&server), "2025").await.unwrap_err();
    assert!(matches!(err, AdmitError::FetchFailed { .. }));
    assert_eq!(controller.state(), ModalState::Failed);
    assert_eq!(controller.summary().total_selected, 0);
}

#[tokio::test]
async fn test_slow_server_times_out_open() {
    let server = server_with_year().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/admission-years/2026/config"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let mut controller = ConfigController::new(Duration::from_millis(200));
    let err = controller.open(&api(&server), "2026").await.unwrap_err();
    match err {
        AdmitError::FetchFailed { reason } => assert!(reason.contains("timed out"), "{reason}"),
        other => panic!("unexpected error: {other:?}"),
    }
}
