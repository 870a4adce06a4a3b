//! Runtime configuration.
//!
//! Configuration is YAML, discovered from an explicit path, the working
//! directory (`polyrun.yaml`, `.polyrun.yaml`), then the platform config
//! directory. A missing file is not an error (every field has a default),
//! and environment variables override whatever was loaded.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub judge: JudgeConfig,
    #[serde(default)]
    pub python: PythonConfig,
}

/// Judge provider settings. The API key is server-side configuration: it is
/// read here, written into the submission header, and nowhere else.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JudgeConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_host: default_api_host(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_api_host() -> String {
    "judge0-ce.p.rapidapi.com".to_owned()
}

fn default_endpoint() -> String {
    "https://judge0-ce.p.rapidapi.com/submissions".to_owned()
}

/// Embedded Python interpreter settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PythonConfig {
    /// Whether Python execution is available at all (default: true).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration with the standard discovery order. An explicit
    /// path must exist; the search locations may all be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match Self::discover(explicit)? {
            Some(found) => found,
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn discover(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::parse_file(path).map(Some);
        }
        for candidate in Self::search_paths() {
            if candidate.exists() {
                return Self::parse_file(&candidate).map(Some);
            }
        }
        Ok(None)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("polyrun.yaml"),
            PathBuf::from(".polyrun.yaml"),
        ];
        if let Some(dirs) = directories::ProjectDirs::from("dev", "polyrun", "polyrun") {
            paths.push(dirs.config_dir().join("config.yaml"));
        }
        paths
    }

    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Environment overrides, applied after file load.
    fn apply_env(&mut self) {
        if let Some(key) =
            env_nonempty("POLYRUN_JUDGE_API_KEY").or_else(|| env_nonempty("JUDGE0_API_KEY"))
        {
            self.judge.api_key = Some(key);
        }
        if let Some(host) = env_nonempty("POLYRUN_JUDGE_HOST") {
            self.judge.api_host = host;
        }
        if let Some(url) = env_nonempty("POLYRUN_JUDGE_URL") {
            self.judge.endpoint = url;
        }
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
