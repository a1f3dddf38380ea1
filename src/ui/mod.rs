//! Desktop UI layer.
//!
//! Uses `wry` for the web view and `tao` for the window and event loop:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! `desktop_host` adapts the shell's host traits to the event loop;
//! `webview_app` builds the window and runs the loop.

pub mod desktop_host;
pub mod webview_app;
