use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub channel_config: ChannelConfig,
    #[serde(default)]
    pub engine_config: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8765
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(default = "default_channel_name")]
    pub name: String,
    #[serde(default = "default_source_lang")]
    pub default_source_lang: String,
    #[serde(default = "default_target_lang")]
    pub default_target_lang: String,
}

fn default_channel_name() -> String {
    "travel_translator/gemini".to_string()
}

fn default_source_lang() -> String {
    "ja".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

impl ChannelConfig {
    /// Resolve an optional language pair against the configured defaults.
    /// Absent arguments are substituted silently, they are not an error.
    pub fn resolve_pair(&self, from: Option<&str>, to: Option<&str>) -> (String, String) {
        (
            from.unwrap_or(&self.default_source_lang).to_string(),
            to.unwrap_or(&self.default_target_lang).to_string(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default)]
    pub options: Option<serde_json::Value>,
}

fn default_engine() -> String {
    "gemini_nano".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let json_value: serde_json::Value = serde_json::from_str(&content)?;
            let config: Config = serde_json::from_value(json_value)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_config: SystemConfig::default(),
            channel_config: ChannelConfig::default(),
            engine_config: EngineConfig::default(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: default_channel_name(),
            default_source_lang: default_source_lang(),
            default_target_lang: default_target_lang(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            options: None,
        }
    }
}
