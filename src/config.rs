//! HTTP設定とアプリケーション設定
//!
//! 優先順位: CLI引数 > 環境変数 > config.toml > デフォルト値

use crate::env::{EnvVar, API_URL_VAR};
use crate::error::{CatalogError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// デフォルトのレコードストア（json-server）
pub const DEFAULT_API_URL: &str = "http://localhost:3001/brands";

/// デフォルトのタイムアウト（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: format!("ecobrand/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// config.toml の内容（すべて任意）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// 解決済みのアプリケーション設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// レコードストアのコレクションURL
    pub api_url: String,
    /// HTTP設定
    pub http: HttpConfig,
    /// データディレクトリ（user.json, config.toml）
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// 各設定ソースを統合して解決
    pub fn resolve(api_url_override: Option<&str>) -> Result<Self> {
        let data_dir = EnvVar::data_dir().ok_or_else(|| {
            CatalogError::Config("neither ECOBRAND_HOME nor HOME is set".to_string())
        })?;
        let file = load_config_file(&data_dir.join("config.toml"))?;
        Ok(Self::from_sources(
            api_url_override.map(str::to_string),
            EnvVar::get(API_URL_VAR),
            file,
            data_dir,
        ))
    }

    fn from_sources(
        cli: Option<String>,
        env: Option<String>,
        file: ConfigFile,
        data_dir: PathBuf,
    ) -> Self {
        let api_url = cli
            .or(env)
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut http = HttpConfig::default();
        if let Some(secs) = file.timeout_secs {
            http.timeout = Some(Duration::from_secs(secs));
        }

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            http,
            data_dir,
        }
    }
}

/// config.toml を読み込む（存在しなければデフォルト）
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
