// webview-shell shared type definitions
// Each submodule defines types used across the shell and its host backends.

pub mod download;
pub mod errors;
pub mod file_chooser;
pub mod navigation;
pub mod settings;
