use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use std::time::Duration;
use thiserror::Error;

use crate::errors::PaperPilotError;

pub const DEFAULT_API_URL: &str = "http://localhost:8004";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
const RESULTS_FILE_NAME: &str = "analysis_results.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl From<ConfigError> for PaperPilotError {
    fn from(err: ConfigError) -> Self {
        PaperPilotError::Config(err.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the analysis service
    pub api_url: String,

    /// Request timeout in seconds; analyses of many papers are slow
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without trailing slashes, ready for path joining
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn audio_url(&self, filename: &str) -> String {
        format!("{}/audio/{}", self.base_url(), filename)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Where the last analysis result is kept
    pub results_file: Option<PathBuf>,

    /// Where downloaded audio goes
    pub download_dir: Option<PathBuf>,
}

/// Client configuration: YAML file, then `PAPERPILOT_*` environment overrides
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaperPilotConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl PaperPilotConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: PaperPilotConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// File (if given) plus process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        use log::debug;

        if let Some(url) = lookup("PAPERPILOT_API_URL").filter(|v| !v.trim().is_empty()) {
            debug!("API URL overridden from environment: {}", url);
            self.api.api_url = url.trim().to_string();
        }

        if let Some(value) = lookup("PAPERPILOT_TIMEOUT_SECS") {
            self.api.timeout_secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "PAPERPILOT_TIMEOUT_SECS".to_string(),
                    value: value.clone(),
                })?;
        }

        if let Some(path) = lookup("PAPERPILOT_RESULTS_FILE").filter(|v| !v.trim().is_empty()) {
            self.storage.results_file = Some(PathBuf::from(path.trim()));
        }

        if let Some(path) = lookup("PAPERPILOT_DOWNLOAD_DIR").filter(|v| !v.trim().is_empty()) {
            self.storage.download_dir = Some(PathBuf::from(path.trim()));
        }

        Ok(())
    }

    /// Configured results file, or one in the platform data directory
    pub fn results_file(&self) -> PathBuf {
        if let Some(path) = &self.storage.results_file {
            return path.clone();
        }
        match directories::ProjectDirs::from("com", "PaperPilot", "paperpilot") {
            Some(dirs) => dirs.data_dir().join(RESULTS_FILE_NAME),
            None => PathBuf::from(".paperpilot").join(RESULTS_FILE_NAME),
        }
    }

    pub fn download_dir(&self) -> PathBuf {
        self.storage.download_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
