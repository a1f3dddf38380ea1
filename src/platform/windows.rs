// webview-shell platform glue for Windows
// Config:    %APPDATA%\WebViewShell
// Downloads: %USERPROFILE%\Downloads
// Opener:    explorer

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("WebViewShell")
}

pub fn get_downloads_dir() -> PathBuf {
    let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\Users\\Default"));
    PathBuf::from(profile).join("Downloads")
}

/// `explorer` takes both folders and registered URI schemes. It exits with 1
/// whether or not a handler was found, so its status is not a launch result.
pub const OPENER: &str = "explorer";
pub const OPENER_STATUS_IS_RELIABLE: bool = false;
