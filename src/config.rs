use crate::error::{Result, SurveyAiError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: String,
    pub host: String,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "qwen2.5:7b".into(),
            host: "http://localhost:11434".into(),
            temperature: 0.3,
            top_p: 0.8,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SurveyAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("survey-ai").join("config.json"))
    }

    pub fn set_model(&mut self, model: String) -> Result<()> {
        self.model = model;
        self.save()
    }

    pub fn set_host(&mut self, host: String) -> Result<()> {
        self.host = host;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "qwen2.5:7b");
        assert_eq!(config.host, "http://localhost:11434");
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
        assert!((config.top_p - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let loaded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.model, config.model);
        assert_eq!(loaded.timeout_seconds, config.timeout_seconds);
    }
}
