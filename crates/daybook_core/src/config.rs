//! Engine configuration surface.
//!
//! # Responsibility
//! - Define the explicit configuration object consumed by component
//!   constructors.
//! - Load configuration from a YAML file supplied by the hosting app.
//!
//! # Invariants
//! - Configuration is passed explicitly into constructors; core components
//!   never read ambient global state.
//! - Optional keys fall back to stable defaults.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default holiday-service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://calendarific.com/api/v2";
/// Default blocking-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading error.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Explicit configuration for the aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Access key for the remote holiday service.
    pub api_key: String,
    /// Country code passed to the holiday service, e.g. `RU`.
    pub country: String,
    /// Path to the bundled offline fallback dataset.
    pub default_holidays_path: PathBuf,
    /// Path to the note store schema definition.
    pub schema_path: PathBuf,
    /// Holiday-service endpoint; overridable for tests and mirrors.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Blocking-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Loads engine configuration from a YAML file.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<EngineConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
