//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NUTRIFLOW_DB_PATH`: Database file path
//! - `NUTRIFLOW_DB_POOL_SIZE`: Connection pool size
//! - `NUTRIFLOW_AI_API_KEY`: Gemini API key (optional; AI analysis is
//!   disabled without it)
//! - `NUTRIFLOW_AI_MODEL`: Gemini model identifier (optional)
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `nutriflow.{json,toml}` in the
//! working directory, up to two parent directories, and next to the
//! executable.

use std::path::{Path, PathBuf};

use nutriflow_domain::{AiConfig, Config, DatabaseConfig, NutriFlowError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `NutriFlowError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The database variables are required; the AI variables are optional.
///
/// # Errors
/// Returns `NutriFlowError::Config` if required variables are missing or
/// have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("NUTRIFLOW_DB_PATH")?;
    let db_pool_size = env_var("NUTRIFLOW_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| NutriFlowError::Config(format!("Invalid pool size: {e}")))
    })?;

    let api_key = std::env::var("NUTRIFLOW_AI_API_KEY").ok().filter(|key| !key.is_empty());
    let model = std::env::var("NUTRIFLOW_AI_MODEL").ok().filter(|model| !model.is_empty());

    let mut ai = AiConfig { api_key, ..AiConfig::default() };
    if let Some(model) = model {
        ai.model = model;
    }

    Ok(Config { database: DatabaseConfig { path: db_path, pool_size: db_pool_size }, ai })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `NutriFlowError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NutriFlowError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NutriFlowError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NutriFlowError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, detecting the format by file
/// extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| NutriFlowError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NutriFlowError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(NutriFlowError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("nutriflow.json"),
            cwd.join("nutriflow.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("nutriflow.json"),
                exe_dir.join("nutriflow.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        NutriFlowError::Config(format!("Missing required environment variable: {key}"))
    })
}
