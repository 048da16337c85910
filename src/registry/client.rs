// This file contains the implementation of the RegistryClient struct,
// which handles communication with the model registry REST API for
// registering model versions and moving them between lifecycle stages.

use crate::config::TrackingConfig;
use crate::error::{RegistrarError, Result};
use crate::registry::auth::Credentials;
use crate::registry::types::{
    ApiErrorBody, CreateModelVersionRequest, CreateModelVersionResponse,
    CreateRegisteredModelRequest, GetModelVersionResponse, ModelStage, ModelVersion,
    TransitionStageRequest, TransitionStageResponse, RESOURCE_ALREADY_EXISTS,
};
use reqwest::{Client, Response};
use std::time::Duration;

pub struct RegistryClientBuilder {
    config: TrackingConfig,
    credentials: Option<Credentials>,
}

impl RegistryClientBuilder {
    pub fn new(config: TrackingConfig) -> Self {
        Self {
            config,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn build(self) -> Result<RegistryClient> {
        self.config.validate()?;

        let mut builder = Client::builder().timeout(Duration::from_secs(self.config.timeout));
        if self.config.skip_tls {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }
        let client = builder.build()?;

        Ok(RegistryClient {
            client,
            base_uri: self.config.uri.trim_end_matches('/').to_string(),
            credentials: self.credentials,
        })
    }
}

pub struct RegistryClient {
    client: Client,
    base_uri: String,
    credentials: Option<Credentials>,
}

impl RegistryClient {
    pub fn builder(config: TrackingConfig) -> RegistryClientBuilder {
        RegistryClientBuilder::new(config)
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/api/2.0/mlflow/{}", self.base_uri, operation)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some(credentials) => credentials.apply(request),
            None => request,
        }
    }

    /// Create the registered model entry if it does not exist yet
    ///
    /// Registering a new version into an already-known model name is the
    /// common path, so the registry's already-exists error is not a failure.
    pub async fn ensure_registered_model(&self, name: &str) -> Result<()> {
        let request = self
            .authorize(self.client.post(self.endpoint("registered-models/create")))
            .json(&CreateRegisteredModelRequest { name });

        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(());
        }

        match Self::decode_error(response).await {
            RegistrarError::Api { code, .. } if code == RESOURCE_ALREADY_EXISTS => Ok(()),
            err => Err(err),
        }
    }

    /// Create a new version of a registered model from an artifact URI
    pub async fn create_model_version(
        &self,
        name: &str,
        source: &str,
        run_id: &str,
    ) -> Result<ModelVersion> {
        let request = self
            .authorize(self.client.post(self.endpoint("model-versions/create")))
            .json(&CreateModelVersionRequest {
                name,
                source,
                run_id,
            });

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let body: CreateModelVersionResponse = response.json().await?;
        Ok(body.model_version)
    }

    /// Register a model: ensure the named entry exists, then create a version
    pub async fn register_model(
        &self,
        name: &str,
        model_uri: &str,
        run_id: &str,
    ) -> Result<ModelVersion> {
        self.ensure_registered_model(name).await?;
        self.create_model_version(name, model_uri, run_id).await
    }

    /// Move a model version to a lifecycle stage
    pub async fn transition_stage(
        &self,
        name: &str,
        version: &str,
        stage: ModelStage,
        archive_existing: bool,
    ) -> Result<ModelVersion> {
        let request = self
            .authorize(
                self.client
                    .post(self.endpoint("model-versions/transition-stage")),
            )
            .json(&TransitionStageRequest {
                name,
                version,
                stage: stage.as_str(),
                archive_existing_versions: archive_existing,
            });

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let body: TransitionStageResponse = response.json().await?;
        Ok(body.model_version)
    }

    /// Fetch the current state of a model version
    pub async fn get_model_version(&self, name: &str, version: &str) -> Result<ModelVersion> {
        let request = self
            .authorize(self.client.get(self.endpoint("model-versions/get")))
            .query(&[("name", name), ("version", version)]);

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let body: GetModelVersionResponse = response.json().await?;
        Ok(body.model_version)
    }

    /// Turn a failed response into the structured API error when the body
    /// allows it, otherwise keep the status and raw body
    async fn decode_error(response: Response) -> RegistrarError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(error) if !error.error_code.is_empty() => RegistrarError::Api {
                code: error.error_code,
                message: error.message,
            },
            _ => RegistrarError::Registry(format!(
                "Registry call failed with status {}: {}",
                status,
                body.trim()
            )),
        }
    }
}
