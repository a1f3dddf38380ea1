// webview-shell platform glue for macOS
// Config:    ~/Library/Application Support/WebViewShell
// Downloads: ~/Downloads
// Opener:    open

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("WebViewShell")
}

pub fn get_downloads_dir() -> PathBuf {
    home_dir().join("Downloads")
}

/// Exits non-zero when no handler accepts the target.
pub const OPENER: &str = "open";
pub const OPENER_STATUS_IS_RELIABLE: bool = true;
