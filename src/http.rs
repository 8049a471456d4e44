//! 共通HTTPヘルパー

use crate::error::{CatalogError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

/// リトライ回数のデフォルト
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// 初回リトライまでの待ち時間
const BASE_DELAY: Duration = Duration::from_millis(200);

/// リトライすべきエラーかどうか
pub fn is_retriable_error(error: &CatalogError) -> bool {
    error.is_retryable()
}

/// リトライ可能なエラーの間、指数バックオフで再実行する
///
/// 初回 + 最大 `max_retries` 回実行する。
pub async fn with_retry<F, Fut, T>(mut op: F, max_retries: u32) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_retries && is_retriable_error(&e) => {
                let delay = BASE_DELAY * 2u32.pow(attempt);
                tracing::debug!(attempt = attempt + 1, ?delay, error = %e, "retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// 読み込み中スピナー（端末でなければ非表示）
pub fn spinner(message: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
