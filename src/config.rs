//! Configuration for soma.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SOMA_HOME, SOMA_CORPUS)
//! 2. Config file (.soma/config.yaml)
//! 3. Defaults (~/.soma)
//!
//! Config file discovery:
//! - Searches current directory and parents for .soma/config.yaml
//! - Relative `paths.home` and `paths.corpus` resolve against the project root
//!   (the directory containing .soma/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{ExplanationLevel, Language};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to the project root)
    pub home: Option<String>,
    /// Extra corpus data directory (relative to the project root)
    pub corpus: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub language: Option<Language>,
    pub level: Option<ExplanationLevel>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to soma home
    pub home: PathBuf,
    /// Directory of extra corpus data files
    pub corpus: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Display settings
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub language: Language,
    pub level: ExplanationLevel,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            language: Language::Es,
            level: ExplanationLevel::Patient,
        }
    }
}

impl DisplaySettings {
    fn from_config(display: Option<&DisplayConfig>) -> Self {
        let defaults = Self::default();
        Self {
            language: display.and_then(|d| d.language).unwrap_or(defaults.language),
            level: display.and_then(|d| d.level).unwrap_or(defaults.level),
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".soma").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Resolve from an already-parsed config file (or none) plus env overrides
fn resolve(
    config_path: Option<&Path>,
    config: Option<&ConfigFile>,
    env_home: Option<String>,
    env_corpus: Option<String>,
    default_home: PathBuf,
) -> ResolvedConfig {
    // Project root: the directory holding .soma/
    let base_dir = config_path
        .and_then(Path::parent)
        .and_then(Path::parent)
        .unwrap_or(Path::new("."));

    let home = if let Some(env_home) = env_home {
        PathBuf::from(env_home)
    } else if let Some(home_path) = config.and_then(|c| c.paths.home.as_deref()) {
        resolve_path(base_dir, home_path)
    } else {
        default_home
    };

    let corpus = if let Some(env_corpus) = env_corpus {
        PathBuf::from(env_corpus)
    } else if let Some(corpus_path) = config.and_then(|c| c.paths.corpus.as_deref()) {
        resolve_path(base_dir, corpus_path)
    } else {
        home.join("corpus")
    };

    let display = DisplaySettings::from_config(config.and_then(|c| c.display.as_ref()));

    ResolvedConfig {
        home,
        corpus,
        config_file: config_path.map(Path::to_path_buf),
        display,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".soma");

    let config_path = find_config_file();
    let config = match &config_path {
        Some(path) => Some(load_config_file(path)?),
        None => None,
    };

    let resolved = resolve(
        config_path.as_deref(),
        config.as_ref(),
        std::env::var("SOMA_HOME").ok(),
        std::env::var("SOMA_CORPUS").ok(),
        default_home,
    );

    tracing::debug!(
        home = %resolved.home.display(),
        corpus = %resolved.corpus.display(),
        "Configuration resolved"
    );

    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Re-read configuration from disk, bypassing the cache
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

/// Get the extra corpus data directory
pub fn corpus_dir() -> Result<PathBuf> {
    Ok(config()?.corpus.clone())
}
