//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use lookaside_core::LookasideError;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable selecting the environment-specific file.
pub const ENVIRONMENT_VAR: &str = "LOOKASIDE_ENVIRONMENT";

/// Prefix for environment variable overrides, e.g. `LOOKASIDE_REDIS__TTL_SECS`.
pub const ENV_PREFIX: &str = "LOOKASIDE";

/// Loads the layered configuration once and holds the validated result.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `LOOKASIDE_` prefix
    ///
    /// The merged result is validated before it is returned.
    pub fn new(config_dir: impl AsRef<str>) -> Result<Self, LookasideError> {
        let config = Self::load_config(config_dir.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, LookasideError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, LookasideError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        Self::load_layers(config_dir, &environment)
    }

    /// Merges file layers and environment overrides, then validates.
    fn load_layers(config_dir: &str, environment: &str) -> Result<AppConfig, LookasideError> {
        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config layer from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_lookaside_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_lookaside_error)?;
        app_config.app.environment = environment.to_string();

        ConfigValidator::validate(&app_config)
            .map_err(|errors| LookasideError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_lookaside_error(err: ConfigError) -> LookasideError {
    LookasideError::Configuration(err.to_string())
}
