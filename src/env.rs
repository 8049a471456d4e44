use std::path::PathBuf;

/// API エンドポイントを上書きする環境変数
pub const API_URL_VAR: &str = "ECOBRAND_API_URL";

/// データディレクトリを上書きする環境変数
pub const HOME_VAR: &str = "ECOBRAND_HOME";

/// ログフィルタの環境変数
pub const LOG_VAR: &str = "ECOBRAND_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// データディレクトリ（~/.ecobrand）を解決
    ///
    /// `ECOBRAND_HOME` > `$HOME/.ecobrand` の順に参照する。
    pub fn data_dir() -> Option<PathBuf> {
        if let Some(dir) = Self::get(HOME_VAR) {
            return Some(PathBuf::from(dir));
        }
        Self::get("HOME").map(|home| PathBuf::from(home).join(".ecobrand"))
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
