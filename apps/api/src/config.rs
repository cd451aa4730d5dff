//! API server configuration

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use crossfade_shared_config::{
    get_env_or_default, get_required_env, parse_env, CommonConfig, ConfigError, ConfigResult,
    DatabaseConfig, Environment,
};

use crate::services::shuffle::service::{DEFAULT_MIN_COVERAGE, DEFAULT_POOL_MULTIPLIER};
use crate::services::ShuffleSettings;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 8080)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,

    /// Harmonic ordering tuning
    pub shuffle: ShuffleSettings,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// In production mode `DATABASE_URL` must be set explicitly. Shuffle
    /// tuning values are validated here so a bad value fails startup.
    pub fn from_env() -> Result<Self> {
        let environment =
            Environment::from_str(&get_env_or_default("ENVIRONMENT", "development"))
                .unwrap_or_default();

        if environment.is_production() {
            Self::validate_database_url()?;
        }

        let common = CommonConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        let shuffle =
            Self::load_shuffle_settings().map_err(|e| anyhow::anyhow!("{}", e))?;

        Ok(Self {
            common,

            port: get_env_or_default("PORT", "8080")
                .parse()
                .context("Invalid PORT value")?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),

            shuffle,
        })
    }

    /// Load `SHUFFLE_DJ_*` settings
    fn load_shuffle_settings() -> ConfigResult<ShuffleSettings> {
        let dj_enabled = parse_env("SHUFFLE_DJ_ENABLED", true)?;

        let min_coverage: f64 = parse_env("SHUFFLE_DJ_MIN_COVERAGE", DEFAULT_MIN_COVERAGE)?;
        if !(0.0..=1.0).contains(&min_coverage) {
            return Err(ConfigError::ValidationError(format!(
                "SHUFFLE_DJ_MIN_COVERAGE must be between 0 and 1 (got {})",
                min_coverage
            )));
        }

        let pool_multiplier: i64 =
            parse_env("SHUFFLE_DJ_POOL_MULTIPLIER", DEFAULT_POOL_MULTIPLIER)?;
        if pool_multiplier < 1 {
            return Err(ConfigError::ValidationError(format!(
                "SHUFFLE_DJ_POOL_MULTIPLIER must be at least 1 (got {})",
                pool_multiplier
            )));
        }

        Ok(ShuffleSettings {
            dj_enabled,
            min_coverage,
            pool_multiplier,
        })
    }

    /// Validate that DATABASE_URL is explicitly set in production
    fn validate_database_url() -> Result<()> {
        match get_required_env("DATABASE_URL") {
            Ok(url) if !url.is_empty() => Ok(()),
            _ => {
                bail!(
                    "DATABASE_URL environment variable is required in production. \
                     Please set your PostgreSQL connection string."
                );
            }
        }
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }
}
