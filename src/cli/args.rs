//! Command-line argument parsing

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "model-registrar")]
#[command(about = "A tool to register trained models into a model registry and promote them to a lifecycle stage")]
#[command(version)]
pub struct Args {
    /// Tracking server URL
    #[arg(
        long = "tracking-uri",
        short = 'r',
        help = "Base URL of the tracking server hosting the model registry"
    )]
    pub tracking_uri: Option<String>,

    /// Path to the model descriptor JSON
    #[arg(
        long = "model-info",
        short = 'f',
        default_value = "reports/experiment_info.json",
        help = "Path to the model descriptor JSON produced by the training step"
    )]
    pub model_info: String,

    /// Name to register the model under
    #[arg(
        long = "model-name",
        short = 'm',
        default_value = "my_model",
        help = "Registered model name in the registry catalog"
    )]
    pub model_name: String,

    /// Target lifecycle stage
    #[arg(
        long = "stage",
        short = 's',
        default_value = "Staging",
        help = "Lifecycle stage to transition the new version to"
    )]
    pub stage: String,

    /// Archive versions already occupying the target stage
    #[arg(
        long = "archive-existing",
        help = "Archive model versions currently in the target stage"
    )]
    pub archive_existing: bool,

    /// Registry username
    #[arg(
        long = "username",
        short = 'u',
        help = "Username for tracking server authentication"
    )]
    pub username: Option<String>,

    /// Registry password
    #[arg(
        long = "password",
        short = 'p',
        help = "Password for tracking server authentication"
    )]
    pub password: Option<String>,

    /// Access token (used as both username and password)
    #[arg(
        long = "token",
        help = "Access token for token-authenticated tracking servers"
    )]
    pub token: Option<String>,

    /// Timeout in seconds for network operations
    #[arg(
        long = "timeout",
        short = 't',
        default_value = "300",
        help = "Timeout for network operations in seconds"
    )]
    pub timeout: u64,

    /// Skip TLS verification
    #[arg(
        long = "skip-tls",
        short = 'k',
        help = "Skip TLS certificate verification"
    )]
    pub skip_tls: bool,

    /// Verbose output
    #[arg(long = "verbose", short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    /// Quiet output
    #[arg(long = "quiet", short = 'q', help = "Suppress all non-error output")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Load configuration from environment variables
    pub fn from_env(mut self) -> Self {
        if self.tracking_uri.is_none() {
            self.tracking_uri = std::env::var("MLFLOW_TRACKING_URI").ok();
        }

        if self.username.is_none() {
            self.username = std::env::var("MLFLOW_TRACKING_USERNAME").ok();
        }

        if self.password.is_none() {
            self.password = std::env::var("MLFLOW_TRACKING_PASSWORD").ok();
        }

        if self.token.is_none() {
            self.token = std::env::var("MLFLOW_TRACKING_TOKEN").ok();
        }

        if let Ok(timeout) = std::env::var("MODEL_REGISTRAR_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout = t;
            }
        }

        if std::env::var("MODEL_REGISTRAR_VERBOSE").is_ok() {
            self.verbose = true;
        }

        if std::env::var("MODEL_REGISTRAR_SKIP_TLS").is_ok() {
            self.skip_tls = true;
        }

        self
    }

    /// Validate arguments
    pub fn validate(&self) -> Result<(), String> {
        let tracking_uri = self
            .tracking_uri
            .as_deref()
            .ok_or("Tracking URI is required (use --tracking-uri or MLFLOW_TRACKING_URI)")?;

        if !tracking_uri.starts_with("http://") && !tracking_uri.starts_with("https://") {
            return Err("Tracking URI must start with http:// or https://".to_string());
        }

        if self.model_name.is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        self.stage
            .parse::<crate::registry::ModelStage>()
            .map_err(|e| e.to_string())?;

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
