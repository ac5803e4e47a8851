use crate::error::{RecipeBrowserError, Result};
use recipe_browser_common::config::MEALDB_SEARCH_URL;
use recipe_browser_common::StalePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 検索エンドポイント（`?s=` は付けない）
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub stale_policy: StalePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: MEALDB_SEARCH_URL.into(),
            timeout_seconds: 30,
            stale_policy: StalePolicy::LatestWins,
        }
    }
}

impl Config {
    /// ~/.config/recipe-browser/config.json を読む（無ければデフォルト）
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipeBrowserError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recipe-browser").join("config.json"))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(RecipeBrowserError::Config("endpoint が空です".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(RecipeBrowserError::Config("timeout_seconds は1以上にしてください".into()));
        }
        Ok(())
    }
}
