use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, supplied once at startup.
///
/// Loaded from a YAML file named by the `ATTIC_CONFIG` environment
/// variable (default `attic.yaml`). When no config file exists, defaults
/// apply, with `LISTEN` and `DOC_ROOT` environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory all request paths are resolved against
    #[serde(default = "default_doc_root")]
    pub doc_root: PathBuf,
    /// Document served when a request path names a directory
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_doc_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { listen_addr: default_listen_addr() }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self { doc_root: default_doc_root(), index_file: default_index_file() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { server: ServerConfig::default(), static_files: StaticFilesConfig::default() }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("ATTIC_CONFIG").unwrap_or_else(|_| "attic.yaml".to_string());

        if std::path::Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {path}"))?;
            return Self::from_yaml(&raw);
        }

        let mut cfg = Config::default();
        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOC_ROOT") {
            cfg.static_files.doc_root = PathBuf::from(root);
        }
        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(raw).context("failed to parse config")
    }
}
