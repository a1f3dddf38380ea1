// webview-shell platform glue for Linux
// Config:    $XDG_CONFIG_HOME/webview-shell or ~/.config/webview-shell
// Downloads: $XDG_DOWNLOAD_DIR or ~/Downloads
// Opener:    xdg-open

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/webview-shell` if set, otherwise `~/.config/webview-shell`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("webview-shell"),
        _ => home_dir().join(".config").join("webview-shell"),
    }
}

/// Uses `$XDG_DOWNLOAD_DIR` if set, otherwise `~/Downloads`.
pub fn get_downloads_dir() -> PathBuf {
    match env::var("XDG_DOWNLOAD_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home_dir().join("Downloads"),
    }
}

/// Exits non-zero when no handler accepts the target.
pub const OPENER: &str = "xdg-open";
pub const OPENER_STATUS_IS_RELIABLE: bool = true;
