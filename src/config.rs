//! Configuration loading for malpip-assistant
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,

    /// A single JSON document
    Json,
}

impl OutputFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Rule table locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Path to the MALPIP criteria CSV
    pub malpip_path: String,

    /// Path to the drug-drug interaction CSV
    pub ddi_path: Option<String>,

    /// Load the interaction table (false = single-table variant)
    pub ddi_enabled: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            malpip_path: "malpip_rules.csv".to_string(),
            ddi_path: Some("ddi_rules.csv".to_string()),
            ddi_enabled: true,
        }
    }
}

/// Language model endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// Model name sent with each request
    pub model: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Report settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Include the composed prompt in the report
    pub show_prompt: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub llm: LlmConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::config_dir().map(|p| p.join("malpip-assistant/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/malpip-assistant/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to load config");
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the MALPIP table path (expanded)
    pub fn malpip_path(&self) -> PathBuf {
        Self::expand_path(&self.rules.malpip_path)
    }

    /// Get the interaction table path, or `None` in the single-table variant
    pub fn ddi_path(&self) -> Option<PathBuf> {
        if !self.rules.ddi_enabled {
            return None;
        }
        self.rules.ddi_path.as_deref().map(Self::expand_path)
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[rules]
malpip_path = "malpip_rules.csv"
ddi_path = "ddi_rules.csv"
ddi_enabled = true

[llm]
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
timeout_secs = 120

[output]
format = "text"
show_prompt = false
"#;
