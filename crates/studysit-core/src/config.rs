use crate::rules::name_length::DEFAULT_MIN_NAME_LENGTH;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".studysit.toml";

/// Configuration for studysit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudySitConfig {
    #[serde(default)]
    pub validation: ValidationOptions,
    #[serde(default)]
    pub output: OutputOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOptions {
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
    #[serde(default)]
    pub disabled_rules: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputOptions {
    #[serde(default = "default_format")]
    pub format: String, // "human", "json"
}

fn default_min_name_length() -> usize {
    DEFAULT_MIN_NAME_LENGTH
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            disabled_rules: None,
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl ValidationOptions {
    /// Check if a rule is switched on
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        match &self.disabled_rules {
            Some(disabled) => !disabled.iter().any(|id| id == rule_id),
            None => true,
        }
    }
}

impl StudySitConfig {
    /// Load config from file or use defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        if let Some(path) = config_path {
            let content = fs::read_to_string(path)
                .context(format!("Failed to read config file: {}", path))?;
            toml::from_str(&content).context("Failed to parse config file")
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            let content = fs::read_to_string(DEFAULT_CONFIG_FILE)
                .context(format!("Failed to read config file: {}", DEFAULT_CONFIG_FILE))?;
            toml::from_str(&content).context("Failed to parse .studysit.toml")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context(format!("Failed to write config file: {}", path))?;
        Ok(())
    }
}
