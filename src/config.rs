use crate::error::{EcoscanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub max_image_size: u32,
    pub timeout_seconds: u64,
    /// Caminho padrão do dataset; `None` usa o dataset embutido.
    pub dataset_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".into(),
            endpoint: "https://api.openai.com/v1".into(),
            max_image_size: 1024,
            timeout_seconds: 60,
            dataset_path: None,
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
            .ok_or_else(|| EcoscanError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("ecoscan").join("config.json"))
    }

    /// A variável de ambiente tem precedência sobre a chave salva.
    pub fn get_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key.clone().ok_or(EcoscanError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_image_size, 1024);
        assert!(config.api_key.is_none());
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            api_key: Some("sk-teste".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.api_key.as_deref(), Some("sk-teste"));
        assert_eq!(restored.endpoint, config.endpoint);
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_key": "sk-x"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-x"));
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_seconds, 60);
    }
}
