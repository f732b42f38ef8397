use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            remote: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl RemoteConfig {
    /// The default local backend address (`medley-server --addr`'s default).
    pub fn default_local() -> Self {
        Self {
            base_url: "http://127.0.0.1:6464".to_string(),
            token: None,
        }
    }
}

/// Resolve the config file path.
///
/// `MEDLEY_CONFIG_DIR` overrides the platform config dir, which keeps tests
/// and scripted setups away from the user's real configuration.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MEDLEY_CONFIG_DIR") {
        return Ok(PathBuf::from(dir).join("config.json"));
    }
    let base = dirs::config_dir().context("determine user config directory")?;
    Ok(base.join("medley").join("config.json"))
}

/// Load the config, falling back to defaults when no file exists yet.
pub fn load_config() -> Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let bytes =
        std::fs::read(&path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: AppConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

pub fn save_config(cfg: &AppConfig) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
    std::fs::write(&path, bytes).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
