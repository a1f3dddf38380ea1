// webview-shell state managers
// Managers hold per-event state: download request construction and the pending file-chooser slot.

pub mod download_manager;
pub mod file_chooser_manager;
