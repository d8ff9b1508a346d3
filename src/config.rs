//! Configuration module for winston.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `WINSTON_` and use double
//! underscores to separate nested levels:
//! - `WINSTON_FETCH__TIMEOUT_SECS=60` sets `fetch.timeout_secs`
//! - `WINSTON_INDEX__MULTIPLICITY=per_document` sets `index.multiplicity`
//! - `WINSTON_INGEST__PARALLEL_THREADS=4` sets `ingest.parallel_threads`

use crate::index::Multiplicity;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".winston";
const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "WINSTON_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Fetching configuration
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Inverted index configuration
    #[serde(default)]
    pub index: IndexConfig,

    /// Ingestion configuration
    #[serde(default)]
    pub ingest: IngestConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Proxy URL for all requests; the environment proxy is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct IndexConfig {
    /// "per_occurrence" (default) or "per_document"
    #[serde(default)]
    pub multiplicity: Multiplicity,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IngestConfig {
    /// Number of threads used to fetch and build documents
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("winston/{}", env!("CARGO_PKG_VERSION"))
}
fn default_parallel_threads() -> usize {
    num_cpus::get()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            fetch: FetchConfig::default(),
            index: IndexConfig::default(),
            ingest: IngestConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            proxy: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            parallel_threads: default_parallel_threads(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path.as_ref()))
            // Double underscore separates nesting levels; single underscores
            // stay part of the field name.
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the workspace config by looking for a .winston directory,
    /// searching from the current directory up to the root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);
        Self::write_template(&config_path, force)?;
        Ok(config_path)
    }

    fn write_template(config_path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = format!(
            r#"# Winston Configuration File

# Version of the configuration schema
version = 1

# Global debug mode (enables debug logging on stderr)
debug = false

[fetch]
# Request timeout in seconds
timeout_secs = 30

# Proxy for all requests. When unset, http_proxy / https_proxy from the
# environment are honoured.
# proxy = "http://proxy.local:3128"

user_agent = "{}"

[index]
# "per_occurrence": a document is listed once per occurrence of a token
# "per_document":   a document is listed at most once per token
multiplicity = "per_occurrence"

[ingest]
# Number of threads used to fetch and build documents (defaults to CPU count)
# parallel_threads = {}
"#,
            default_user_agent(),
            num_cpus::get()
        );

        std::fs::write(config_path, template)?;
        Ok(())
    }
}
