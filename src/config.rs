//! Runtime configuration read from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use tracing::info;

/// Base URL of the registration backend.
pub const API_URL_VAR: &str = "POOKALAM_API_URL";
/// Directory exported workbooks are written to.
pub const EXPORT_DIR_VAR: &str = "POOKALAM_EXPORT_DIR";
/// Optional per-request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "POOKALAM_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:3000/";

const REGISTER_PATH: &str = "register";

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value is unusable.
    #[error("invalid {var} value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Full URL registrations are POSTed to (`<base>/register`).
    pub register_endpoint: Url,
    pub export_dir: PathBuf,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key → value source.
    ///
    /// Unset variables fall back to defaults; set but invalid ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = var(&lookup, API_URL_VAR, DEFAULT_API_URL);
        let register_endpoint = register_endpoint(&api_url)?;

        let export_dir = lookup(EXPORT_DIR_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let dir = default_export_dir();
                info!("{EXPORT_DIR_VAR} not set, using default: {}", dir.display());
                dir
            });

        let request_timeout = lookup(TIMEOUT_VAR)
            .filter(|v| !v.is_empty())
            .map(|v| parse_timeout(&v))
            .transpose()?;

        Ok(Self {
            register_endpoint,
            export_dir,
            request_timeout,
        })
    }
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).filter(|v| !v.is_empty()).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

/// Resolves `register` against `base`, treating `base` as a directory.
fn register_endpoint(base: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: API_URL_VAR,
        value: base.to_string(),
        reason,
    };

    let base_dir = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    let url = Url::parse(&base_dir).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    url.join(REGISTER_PATH).map_err(|e| invalid(e.to_string()))
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(ConfigError::Invalid {
            var: TIMEOUT_VAR,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            var: TIMEOUT_VAR,
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
