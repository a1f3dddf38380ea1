//! webview-shell: a single full-screen web view pointed at a fixed start URL.
//!
//! The library holds the shell's policies (navigation handoff, downloads, file
//! chooser, theme, back action) behind host traits, plus the desktop backend.

pub mod app;
pub mod cli;
pub mod host;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
