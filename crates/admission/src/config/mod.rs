use crate::allocation::Capacity;
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub admission: AdmissionConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let capacity = env::var("ADMISSION_CAPACITY")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let input = env::var("ADMISSION_INPUT").unwrap_or_else(|_| "applicants.txt".to_string());
        let output_dir = env::var("ADMISSION_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_target = env::var("APP_LOG_TARGET")
            .map(|value| LogTarget::from_str(&value))
            .unwrap_or_default();

        Ok(Self {
            environment,
            admission: AdmissionConfig {
                capacity,
                input: PathBuf::from(input),
                output_dir: PathBuf::from(output_dir),
            },
            telemetry: TelemetryConfig {
                log_level,
                log_target,
            },
        })
    }
}

/// Inputs for an allocation run; CLI flags take precedence over these.
#[derive(Debug, Clone)]
pub struct AdmissionConfig {
    /// Raw `ADMISSION_CAPACITY`; only parsed when no flag overrides it.
    pub capacity: Option<String>,
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl AdmissionConfig {
    /// Capacity from the flag if given, otherwise from the environment.
    pub fn capacity(&self, flag: Option<&str>) -> Result<Option<Capacity>, ConfigError> {
        flag.or(self.capacity.as_deref())
            .map(parse_capacity)
            .transpose()
    }
}

/// Where log lines are written. Rosters may be printed on stdout, so logs
/// default to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    #[default]
    Stderr,
    Stdout,
}

impl LogTarget {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => Self::Stdout,
            _ => Self::Stderr,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_target: LogTarget,
}

/// Parses a per-department capacity, which must be a positive integer.
pub fn parse_capacity(raw: &str) -> Result<Capacity, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(Capacity::new)
        .ok_or_else(|| ConfigError::InvalidCapacity {
            value: raw.trim().to_string(),
        })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCapacity { value: String },
    MissingCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity { value } => {
                write!(
                    f,
                    "invalid number of students '{}': capacity must be a positive integer",
                    value
                )
            }
            ConfigError::MissingCapacity => write!(
                f,
                "no capacity supplied: pass --capacity, set ADMISSION_CAPACITY, or provide it on stdin"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
