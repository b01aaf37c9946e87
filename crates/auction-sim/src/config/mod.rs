use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log filter used when `APP_LOG_LEVEL` is not set.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "warn",
            Self::Test => "debug",
            Self::Production => "error",
        }
    }
}

/// Top-level configuration for the simulator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_catalog(None)
    }

    /// Like [`AppConfig::load`], with an explicit catalog path taking
    /// precedence over `AUCTION_CATALOG_PATH`. When one is given the
    /// variable is not consulted at all.
    pub fn load_with_catalog(catalog_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = match catalog_path {
            Some(path) => Some(path),
            None => match env::var("AUCTION_CATALOG_PATH") {
                Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyCatalogPath),
                Ok(raw) => Some(PathBuf::from(raw.trim())),
                Err(_) => None,
            },
        };

        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig { path },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where property records come from. `None` selects the built-in catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyCatalogPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCatalogPath => {
                write!(f, "AUCTION_CATALOG_PATH is set but empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
