//! ecobrand browse コマンド
//!
//! 対話的なブランドブラウザを起動する。

use super::Context;
use crate::tui;

pub async fn run(ctx: &Context) -> Result<(), String> {
    let collection = ctx.load_collection(false).await;
    tui::run_browser(collection).map_err(|e| format!("TUI error: {}", e))
}
