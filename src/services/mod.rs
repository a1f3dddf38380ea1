// webview-shell services
// Stateless policies (naming, navigation, theme) plus settings and the HTTP download service.

pub mod download_service;
pub mod file_name;
pub mod navigation_policy;
pub mod settings_engine;
pub mod theme_engine;
