//! Configuration validation.
//!
//! Collects every problem in one pass so startup fails with a complete
//! report instead of the first bad value.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Duration or count must be positive.
    NonPositive { name: String },
    /// Order count range is inverted.
    InvalidOrderRange { min: u32, max: u32 },
    /// Fewer users than workers leaves workers without an id range.
    TooFewUsers { users: u64, workers: usize },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(f, "Invalid pool size: min ({}) is greater than max ({})", min, max)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositive { name } => write!(f, "{} must be greater than zero", name),
            Self::InvalidOrderRange { min, max } => {
                write!(f, "loader.min_orders ({}) exceeds loader.max_orders ({})", min, max)
            }
            Self::TooFewUsers { users, workers } => {
                write!(f, "loader.total_users ({}) is smaller than loader.workers ({})", users, workers)
            }
            Self::InvalidLogLevel { value } => write!(f, "Invalid log level: {}", value),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_redis(&config.redis, &mut errors);
        Self::validate_loader(&config.loader, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &crate::ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.rest_port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "rest_port".to_string(),
                value: config.rest_port,
            });
        }
        if config.request_timeout_secs == 0 {
            errors.push(non_positive("server.request_timeout_secs"));
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !config.url.starts_with("mysql://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with mysql://".to_string(),
            });
        } else if let Err(e) = Url::parse(&config.url) {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: e.to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections == 0 {
            errors.push(non_positive("database.max_connections"));
        }
        if config.connect_timeout_secs == 0 {
            errors.push(non_positive("database.connect_timeout_secs"));
        }
    }

    fn validate_redis(config: &crate::RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.ttl_secs == 0 {
            errors.push(non_positive("redis.ttl_secs"));
        }

        if !config.enabled {
            return;
        }

        if !config.url.starts_with("redis://") && !config.url.starts_with("rediss://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            });
        }
        if config.pool_size == 0 {
            errors.push(non_positive("redis.pool_size"));
        }
        if config.timeout_secs == 0 {
            errors.push(non_positive("redis.timeout_secs"));
        }
    }

    fn validate_loader(config: &crate::LoaderConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.workers == 0 {
            errors.push(non_positive("loader.workers"));
        } else if config.total_users < config.workers as u64 {
            errors.push(ConfigValidationError::TooFewUsers {
                users: config.total_users,
                workers: config.workers,
            });
        }
        if config.user_batch_size == 0 {
            errors.push(non_positive("loader.user_batch_size"));
        }
        if config.order_batch_size == 0 {
            errors.push(non_positive("loader.order_batch_size"));
        }
        if config.min_orders > config.max_orders {
            errors.push(ConfigValidationError::InvalidOrderRange {
                min: config.min_orders,
                max: config.max_orders,
            });
        }
    }

    fn validate_observability(
        config: &crate::ObservabilityConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}

fn non_positive(name: &str) -> ConfigValidationError {
    ConfigValidationError::NonPositive {
        name: name.to_string(),
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
