//! Registration and promotion flow against a mock tracking server

use model_registrar::cli::{Args, Runner};
use model_registrar::config::TrackingConfig;
use model_registrar::error::RegistrarError;
use model_registrar::registry::{ModelStage, RegistryClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_client(server: &MockServer) -> RegistryClient {
    RegistryClient::builder(TrackingConfig::new(server.uri()))
        .build()
        .expect("client should build against mock server")
}

fn model_version_body(name: &str, version: &str, stage: &str) -> serde_json::Value {
    json!({
        "model_version": {
            "name": name,
            "version": version,
            "current_stage": stage,
            "source": "runs:/abc123/model",
            "run_id": "abc123",
            "status": "READY"
        }
    })
}

#[tokio::test]
async fn register_model_sends_runs_uri_as_source() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/registered-models/create"))
        .and(body_partial_json(json!({"name": "churn_model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "registered_model": {"name": "churn_model"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/model-versions/create"))
        .and(body_partial_json(json!({
            "name": "churn_model",
            "source": "runs:/abc123/model",
            "run_id": "abc123"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(model_version_body("churn_model", "3", "None")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = registry_client(&server);
    let version = client
        .register_model("churn_model", "runs:/abc123/model", "abc123")
        .await
        .unwrap();

    assert_eq!(version.version, "3");
    assert_eq!(version.current_stage, "None");
}

#[tokio::test]
async fn register_tolerates_existing_registered_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/registered-models/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_code": "RESOURCE_ALREADY_EXISTS",
            "message": "Registered Model (name=churn_model) already exists."
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/model-versions/create"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(model_version_body("churn_model", "4", "None")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = registry_client(&server);
    let version = client
        .register_model("churn_model", "runs:/abc123/model", "abc123")
        .await
        .unwrap();

    assert_eq!(version.version, "4");
}

#[tokio::test]
async fn registration_error_surfaces_api_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/registered-models/create"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error_code": "PERMISSION_DENIED",
            "message": "No write access to the registry"
        })))
        .mount(&server)
        .await;

    let client = registry_client(&server);
    let err = client
        .register_model("churn_model", "runs:/abc123/model", "abc123")
        .await
        .unwrap_err();

    assert_eq!(err.api_code(), Some("PERMISSION_DENIED"));
}

#[tokio::test]
async fn undecodable_error_body_keeps_status_and_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/registered-models/create"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = registry_client(&server);
    let err = client
        .register_model("churn_model", "runs:/abc123/model", "abc123")
        .await
        .unwrap_err();

    match err {
        RegistrarError::Registry(message) => {
            assert!(message.contains("502"));
            assert!(message.contains("Bad Gateway"));
        }
        other => panic!("expected Registry error, got {:?}", other),
    }
}

#[tokio::test]
async fn transition_stage_posts_canonical_stage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/model-versions/transition-stage"))
        .and(body_partial_json(json!({
            "name": "churn_model",
            "version": "3",
            "stage": "Staging",
            "archive_existing_versions": false
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(model_version_body("churn_model", "3", "Staging")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = registry_client(&server);
    let updated = client
        .transition_stage("churn_model", "3", ModelStage::Staging, false)
        .await
        .unwrap();

    assert_eq!(updated.current_stage, "Staging");
}

#[tokio::test]
async fn get_model_version_uses_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/mlflow/model-versions/get"))
        .and(query_param("name", "churn_model"))
        .and(query_param("version", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(model_version_body("churn_model", "3", "None")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = registry_client(&server);
    let version = client.get_model_version("churn_model", "3").await.unwrap();

    assert_eq!(version.current_stage, "None");
}

fn runner_args(server: &MockServer, model_info: &std::path::Path) -> Args {
    Args {
        tracking_uri: Some(server.uri()),
        model_info: model_info.to_string_lossy().into_owned(),
        model_name: "churn_model".to_string(),
        stage: "Staging".to_string(),
        archive_existing: false,
        username: None,
        password: None,
        token: None,
        timeout: 30,
        skip_tls: false,
        verbose: false,
        quiet: true,
    }
}

#[tokio::test]
async fn transition_failure_is_reraised_after_diagnostic_read() {
    let server = MockServer::start().await;

    let descriptor_path = std::env::temp_dir().join(format!(
        "model-registrar-flow-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &descriptor_path,
        r#"{"run_id": "abc123", "model_path": "model"}"#,
    )
    .unwrap();

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/registered-models/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "registered_model": {"name": "churn_model"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/model-versions/create"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(model_version_body("churn_model", "7", "None")),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/model-versions/transition-stage"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error_code": "INTERNAL_ERROR",
            "message": "Stage transition rejected"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The diagnostic read must happen exactly once, and its success must not
    // mask the transition failure
    Mock::given(method("GET"))
        .and(path("/api/2.0/mlflow/model-versions/get"))
        .and(query_param("name", "churn_model"))
        .and(query_param("version", "7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(model_version_body("churn_model", "7", "None")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let runner = Runner::new(runner_args(&server, &descriptor_path)).unwrap();
    let err = runner.run().await.unwrap_err();

    assert_eq!(err.api_code(), Some("INTERNAL_ERROR"));

    std::fs::remove_file(&descriptor_path).unwrap();
}

#[tokio::test]
async fn transition_failure_survives_failed_diagnostic_read() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.0/mlflow/model-versions/transition-stage"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error_code": "INTERNAL_ERROR",
            "message": "Stage transition rejected"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/mlflow/model-versions/get"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_code": "RESOURCE_DOES_NOT_EXIST",
            "message": "Model version not found"
        })))
        .mount(&server)
        .await;

    let client = registry_client(&server);
    let err = client
        .transition_stage("churn_model", "7", ModelStage::Staging, false)
        .await
        .unwrap_err();
    assert_eq!(err.api_code(), Some("INTERNAL_ERROR"));

    // The diagnostic read fails independently with its own error
    let detail_err = client.get_model_version("churn_model", "7").await.unwrap_err();
    assert_eq!(detail_err.api_code(), Some("RESOURCE_DOES_NOT_EXIST"));
}
