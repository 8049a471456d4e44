//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したブランドブラウザを提供する。

mod browser;

pub use browser::run as run_browser;
