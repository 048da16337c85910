//! Runner driving the registration and promotion workflow

use crate::cli::args::Args;
use crate::config::TrackingConfig;
use crate::error::{RegistrarError, Result};
use crate::logging::Logger;
use crate::model::ModelDescriptor;
use crate::registry::{Credentials, ModelStage, ModelVersion, RegistryClient};
use std::path::Path;
use std::time::Instant;

pub struct Runner {
    args: Args,
    logger: Logger,
}

impl Runner {
    pub fn new(args: Args) -> Result<Self> {
        let logger = if args.quiet {
            Logger::new_quiet()
        } else {
            Logger::new(args.verbose)
        };

        Ok(Self { args, logger })
    }

    pub async fn run(&self) -> Result<()> {
        let start_time = Instant::now();

        self.logger.section("Model Registrar");

        self.validate_arguments()?;
        let descriptor = self.load_descriptor()?;
        let client = self.create_registry_client()?;
        let version = self.register(&client, &descriptor).await?;
        self.promote(&client, &version).await?;

        self.logger.summary_kv(
            "Registration summary",
            &[
                ("Model", self.args.model_name.clone()),
                ("Version", version.version.clone()),
                ("Stage", self.args.stage.clone()),
            ],
        );
        self.logger.success(&format!(
            "Operation completed successfully in {}",
            self.logger.format_duration(start_time.elapsed())
        ));

        Ok(())
    }

    fn validate_arguments(&self) -> Result<()> {
        self.args.validate().map_err(RegistrarError::Validation)?;

        self.logger.info(&format!("Model name: {}", self.args.model_name));
        self.logger.info(&format!(
            "Tracking server: {}",
            self.args.tracking_uri.as_deref().unwrap_or_default()
        ));
        self.logger.step("Arguments validation passed");
        Ok(())
    }

    fn load_descriptor(&self) -> Result<ModelDescriptor> {
        self.logger.subsection("Loading model descriptor");

        let path = Path::new(&self.args.model_info);
        let descriptor = ModelDescriptor::load(path)?;

        self.logger.info(&format!("Model descriptor loaded from {}", self.args.model_info));
        self.logger.detail(&format!("Run id: {}", descriptor.run_id));
        self.logger.detail(&format!("Artifact path: {}", descriptor.model_path));
        Ok(descriptor)
    }

    fn create_registry_client(&self) -> Result<RegistryClient> {
        self.logger.subsection("Setting up registry client");

        // validate() guarantees the URI is present
        let tracking_uri = self.args.tracking_uri.clone().unwrap_or_default();
        let config = TrackingConfig::new(tracking_uri)
            .with_timeout(self.args.timeout)
            .with_skip_tls(self.args.skip_tls);

        let credentials = Credentials::resolve(
            self.args.username.clone(),
            self.args.password.clone(),
            self.args.token.clone(),
        );
        match &credentials {
            Some(credentials) => {
                self.logger.detail(&format!("Authenticating as: {}", credentials.username));
            }
            None => {
                self.logger.warning("No credentials provided, proceeding without authentication");
            }
        }

        RegistryClient::builder(config)
            .with_credentials(credentials)
            .build()
    }

    async fn register(
        &self,
        client: &RegistryClient,
        descriptor: &ModelDescriptor,
    ) -> Result<ModelVersion> {
        self.logger.subsection("Registering model");

        let model_uri = descriptor.model_uri();
        self.logger.info(&format!("Registering model from URI: {}", model_uri));

        let version = client
            .register_model(&self.args.model_name, &model_uri, &descriptor.run_id)
            .await?;

        self.logger.success(&format!(
            "Model {} version {} registered successfully",
            self.args.model_name, version.version
        ));
        Ok(version)
    }

    async fn promote(&self, client: &RegistryClient, version: &ModelVersion) -> Result<()> {
        let stage: ModelStage = self.args.stage.parse()?;

        self.logger.subsection("Transitioning stage");
        self.logger.info(&format!(
            "Transitioning model {} version {} to {}",
            self.args.model_name, version.version, stage
        ));

        match client
            .transition_stage(
                &self.args.model_name,
                &version.version,
                stage,
                self.args.archive_existing,
            )
            .await
        {
            Ok(updated) => {
                self.logger.success(&format!(
                    "Model {} version {} is now in stage {}",
                    updated.name, updated.version, updated.current_stage
                ));
                Ok(())
            }
            Err(transition_error) => {
                self.logger.error(&format!(
                    "Failed to transition model to {}: {}",
                    stage, transition_error
                ));

                // Best-effort read of the version's current stage, for the log only
                match client
                    .get_model_version(&self.args.model_name, &version.version)
                    .await
                {
                    Ok(details) => {
                        self.logger.info(&format!(
                            "Current model version stage: {}",
                            details.current_stage
                        ));
                    }
                    Err(detail_error) => {
                        self.logger.error(&format!(
                            "Could not retrieve model version details: {}",
                            detail_error
                        ));
                    }
                }

                Err(transition_error)
            }
        }
    }
}
