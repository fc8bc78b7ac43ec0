use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of deployment.
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
}

/// Top-level configuration for the planner and its tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub sampling: SamplingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("MISSION_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let catalog_path = env::var("MISSION_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let seed = env::var("MISSION_SAMPLE_SEED")
            .unwrap_or_else(|_| "42".to_string())
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidSeed)?;

        let sample_size = env::var("MISSION_SAMPLE_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidSampleSize)?;
        if sample_size == 0 {
            return Err(ConfigError::InvalidSampleSize);
        }

        let log_level = env::var("MISSION_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig { path: catalog_path },
            sampling: SamplingConfig { seed, sample_size },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where reference tables come from; `None` means the built-in catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// Random scenario generation defaults.
#[derive(Debug, Clone, Copy)]
pub struct SamplingConfig {
    pub seed: u64,
    pub sample_size: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeed,
    InvalidSampleSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeed => write!(f, "MISSION_SAMPLE_SEED must be a valid u64"),
            ConfigError::InvalidSampleSize => {
                write!(f, "MISSION_SAMPLE_SIZE must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
