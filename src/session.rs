//! ローカル認証（1端末・1ユーザー）
//!
//! `~/.ecobrand/user.json` に1件だけユーザーを保存する。
//! パスワードは扱わず、サインイン時はメールアドレスの一致のみを確認する。

use crate::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// user.json の内容
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountFile {
    user: User,
    signed_in: bool,
}

/// ユーザー情報の永続化
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    /// データディレクトリ配下の user.json を使う
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("user.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// サインイン中のユーザー
    pub fn current(&self) -> Result<Option<User>> {
        Ok(self
            .load()?
            .filter(|account| account.signed_in)
            .map(|account| account.user))
    }

    /// アカウントを作成してサインインする
    ///
    /// 既存のアカウントは置き換えられる。
    pub fn sign_up(&self, email: &str, now: DateTime<Utc>) -> Result<User> {
        let email = normalize_email(email)?;
        let user = User {
            id: now.timestamp_millis().to_string(),
            email,
        };
        self.save(&AccountFile {
            user: user.clone(),
            signed_in: true,
        })?;
        tracing::debug!(user_id = %user.id, "signed up");
        Ok(user)
    }

    /// 保存済みアカウントのメールアドレスと一致すればサインインする
    pub fn sign_in(&self, email: &str) -> Result<User> {
        let email = normalize_email(email)?;
        let mut account = self.load()?.ok_or_else(|| {
            CatalogError::Auth("No account found. Please sign up first.".to_string())
        })?;

        if account.user.email != email {
            return Err(CatalogError::Auth("Invalid credentials".to_string()));
        }

        account.signed_in = true;
        self.save(&account)?;
        Ok(account.user)
    }

    /// サインアウト（サインインしていなければ false）
    pub fn sign_out(&self) -> Result<bool> {
        match self.load()? {
            Some(mut account) if account.signed_in => {
                account.signed_in = false;
                self.save(&account)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn load(&self) -> Result<Option<AccountFile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, account: &AccountFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(account)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"))
}

/// 前後の空白を除き、形式を確認する
fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim();
    if !email_pattern().is_match(email) {
        return Err(CatalogError::Auth(format!(
            "'{}' is not a valid email address",
            email
        )));
    }
    Ok(email.to_string())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
