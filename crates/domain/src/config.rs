//! Application configuration structures
//!
//! Loaded by the infrastructure layer from environment variables or a
//! JSON/TOML config file.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AI_MODEL;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

/// Generative-AI backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key for the Gemini backend; analysis is unavailable without it
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self { api_key: None, model: default_model() }
    }
}

fn default_model() -> String {
    DEFAULT_AI_MODEL.to_string()
}
