//! Desktop shell window using `wry` + `tao`.
//!
//! Architecture:
//! - The [`Shell`] is initialized against a recording [`ProxySurface`] first;
//!   the web view is then built from what it recorded (capabilities, theme,
//!   start URL) and the surface is attached.
//! - `shell.js` plus a small config prelude is injected on every document. It
//!   suppresses the context menu, reports history state, and forwards back
//!   keys and file-input clicks over IPC.
//! - Every wry handler locks the shared state, calls into the shell and
//!   returns; window and web view changes go back through [`UserEvent`]s.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Fullscreen, Theme, Window, WindowBuilder};
use wry::WebViewBuilder;

use crate::app::Shell;
use crate::managers::download_manager::DownloadManager;
use crate::platform;
use crate::services::download_service::{DownloadNotifier, DownloadService};
use crate::services::file_name::{extension_for_mime, mime_for_extension};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::download::{DownloadEvent, DownloadOutcome};
use crate::types::errors::{FileChooserError, NavigationError};
use crate::types::file_chooser::{ActivityResult, FileChooserParams, SelectedFile};
use crate::types::navigation::NavigationDecision;
use crate::types::settings::ShellSettings;
use crate::ui::desktop_host::{DesktopHost, ProxySurface, SurfaceConfig, UserEvent};

const SHELL_JS: &str = include_str!("../../resources/ui/shell.js");

type DesktopShell = Shell<ProxySurface, DesktopHost>;

struct ShellState {
    shell: DesktopShell,
    /// Engine user agent as reported by the page.
    user_agent: String,
}

fn lock(state: &Mutex<ShellState>) -> MutexGuard<'_, ShellState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Config prelude, theme hint and the shell script, in injection order.
fn initialization_script(config: &SurfaceConfig, color_scheme_script: &str) -> String {
    let prelude = serde_json::json!({
        "longPress": config.long_press_enabled,
        "zoom": config.settings.zoom_enabled(),
    });
    format!(
        "window.__SHELL_CONFIG__={};\n{}\n{}",
        prelude, color_scheme_script, SHELL_JS
    )
}

// ─── IPC handler ───

/// First `max_chars` characters of an IPC body, for logging.
fn log_excerpt(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

fn handle_ipc(state: &mut ShellState, proxy: &EventLoopProxy<UserEvent>, message: &str) {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("Ignoring malformed IPC message: {}", e);
            return;
        }
    };
    let Some(cmd) = msg.get("cmd").and_then(|v| v.as_str()) else {
        return;
    };
    let can_go_back = msg.get("can_go_back").and_then(|v| v.as_bool());

    match cmd {
        "page_state" => {
            if let Some(back) = can_go_back {
                state.shell.surface_mut().set_can_go_back(back);
            }
            if let Some(ua) = msg.get("user_agent").and_then(|v| v.as_str()) {
                state.user_agent = ua.to_string();
            }
        }

        "back_pressed" => {
            if let Some(back) = can_go_back {
                state.shell.surface_mut().set_can_go_back(back);
            }
            let action = state.shell.on_back_pressed();
            log::debug!("Back pressed: {:?}", action);
        }

        "toggle_chrome" => {
            let _ = proxy.send_event(UserEvent::ToggleImmersive);
        }

        "show_file_chooser" => {
            let token = msg.get("token").and_then(|v| v.as_str()).unwrap_or("").to_string();
            let params = FileChooserParams {
                accept_types: msg
                    .get("accept")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
                multiple: msg.get("multiple").and_then(|v| v.as_bool()).unwrap_or(false),
            };
            let reply = proxy.clone();
            state.shell.on_show_file_chooser(
                params,
                Box::new(move |selection| {
                    let script = file_chooser_result_script(&token, selection);
                    let _ = reply.send_event(UserEvent::EvalScript(script));
                }),
            );
        }

        other => log::debug!("Unknown IPC command: {}", other),
    }
}

/// Reads a picked file into the `{name, mime, data}` shape `shell.js` turns
/// back into a `File`.
fn file_payload(file: &SelectedFile) -> Result<serde_json::Value, FileChooserError> {
    let bytes = fs::read(&file.path)
        .map_err(|e| FileChooserError::ReadFailed(format!("{}: {}", file.path.display(), e)))?;
    let mime = file
        .path
        .extension()
        .and_then(|e| mime_for_extension(&e.to_string_lossy()))
        .unwrap_or("application/octet-stream");
    Ok(serde_json::json!({
        "name": file.name,
        "mime": mime,
        "data": BASE64.encode(bytes),
    }))
}

/// Script that hands the picked files (or `null`) to the waiting input.
/// Unreadable files are skipped.
fn file_chooser_result_script(token: &str, selection: Option<Vec<SelectedFile>>) -> String {
    let files = match selection {
        None => serde_json::Value::Null,
        Some(files) => serde_json::Value::Array(
            files
                .iter()
                .filter_map(|file| match file_payload(file) {
                    Ok(payload) => Some(payload),
                    Err(e) => {
                        log::warn!("Skipping picked file: {}", e);
                        None
                    }
                })
                .collect(),
        ),
    };
    format!(
        "window.__shell_fileChooserResult&&window.__shell_fileChooserResult({},{})",
        serde_json::Value::String(token.to_string()),
        files
    )
}

// ─── Host-side dialogs ───

fn pick_files(params: &FileChooserParams) -> ActivityResult {
    let extensions: Vec<String> = params
        .accept_types
        .iter()
        .filter_map(|t| match t.strip_prefix('.') {
            Some(ext) => Some(ext.to_ascii_lowercase()),
            None => extension_for_mime(t).map(str::to_string),
        })
        .collect();

    let mut dialog = rfd::FileDialog::new();
    if !extensions.is_empty() {
        dialog = dialog.add_filter("Accepted files", extensions.as_slice());
    }

    let picked: Option<Vec<PathBuf>> = if params.multiple {
        dialog.pick_files()
    } else {
        dialog.pick_file().map(|p| vec![p])
    };

    match picked {
        Some(paths) => ActivityResult::Ok(paths.into_iter().map(SelectedFile::from_path).collect()),
        None => ActivityResult::Canceled,
    }
}

fn show_alert(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn set_immersive(window: &Window, on: bool) {
    window.set_fullscreen(if on { Some(Fullscreen::Borderless(None)) } else { None });
}

fn download_notifier(proxy: &EventLoopProxy<UserEvent>) -> DownloadNotifier {
    let proxy = Mutex::new(proxy.clone());
    Arc::new(move |outcome| {
        let proxy = proxy.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = proxy.send_event(UserEvent::DownloadFinished(outcome));
    })
}

fn download_toast(outcome: &DownloadOutcome) -> String {
    let text = match outcome {
        DownloadOutcome::Completed { title, .. } => format!("Downloaded {}", title),
        DownloadOutcome::Failed { title, reason, .. } => format!("Download of {} failed: {}", title, reason),
    };
    format!(
        "window.__shell_toast&&window.__shell_toast({})",
        serde_json::Value::String(text)
    )
}

fn load_settings() -> ShellSettings {
    let mut engine = SettingsEngine::new(None);
    match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{} ({}), using defaults", e, engine.get_config_path());
            ShellSettings::default()
        }
    }
}

// ─── Main entry point ───

pub fn run() {
    let settings = load_settings();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = match WindowBuilder::new()
        .with_title("WebView Shell")
        .with_inner_size(tao::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
    {
        Ok(window) => window,
        Err(e) => {
            log::error!("Failed to create window: {}", e);
            return;
        }
    };
    let dark_theme = window.theme() == Theme::Dark;

    let downloads = match DownloadService::new() {
        Ok(service) => service.with_notifier(download_notifier(&proxy)),
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let downloads_dir = platform::get_downloads_dir();
    let host = DesktopHost::new(proxy.clone(), dark_theme, downloads, downloads_dir.clone());
    let surface = ProxySurface::new(proxy.clone());
    let user_agent = settings.user_agent.clone();

    let mut shell = Shell::new(surface, host, settings, DownloadManager::new(downloads_dir));
    shell.initialize();

    let config = shell.surface().config().clone();
    let init_script = initialization_script(&config, &shell.theme().color_scheme_script());
    let start_url = config
        .start_url
        .clone()
        .unwrap_or_else(|| shell.settings().start_url.clone());

    let state = Arc::new(Mutex::new(ShellState {
        shell,
        user_agent: user_agent.clone().unwrap_or_default(),
    }));

    let nav_state = state.clone();
    let nw_state = state.clone();
    let nw_proxy = proxy.clone();
    let dl_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let mut builder = WebViewBuilder::new()
        .with_url(&start_url)
        .with_initialization_script(&init_script)
        .with_hotkeys_zoom(config.settings.zoom_enabled())
        .with_clipboard(true)
        .with_back_forward_navigation_gestures(true)
        .with_devtools(cfg!(debug_assertions))
        .with_navigation_handler(move |url| {
            let mut s = lock(&nav_state);
            s.shell.on_navigation(&url) == NavigationDecision::Allow
        })
        .with_new_window_req_handler(move |url, _features| {
            // Single-window surface: popups navigate the current view.
            let mut s = lock(&nw_state);
            if s.shell.on_navigation(&url) == NavigationDecision::Allow {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_download_started_handler(move |url, suggested_path| {
            let mut s = lock(&dl_state);
            let content_disposition = suggested_path
                .file_name()
                .map(|n| format!("attachment; filename=\"{}\"", n.to_string_lossy()))
                .unwrap_or_default();
            let event = DownloadEvent {
                url,
                user_agent: s.user_agent.clone(),
                content_disposition,
                mime_type: String::new(),
                content_length: None,
            };
            s.shell.on_download(&event);
            // The download service owns the transfer; cancel the engine's own.
            false
        })
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            log::debug!("[IPC] {}", log_excerpt(body, 200));
            let mut s = lock(&ipc_state);
            handle_ipc(&mut s, &ipc_proxy, body);
        });

    if let Some(ua) = user_agent.as_deref() {
        builder = builder.with_user_agent(ua);
    }

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let Some(vbox) = window.default_vbox() else {
            log::error!("Failed to get GTK vbox");
            return;
        };
        builder.build_gtk(vbox)
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window);

    let webview = match webview {
        Ok(webview) => webview,
        Err(e) => {
            log::error!("Failed to create WebView: {}", e);
            return;
        }
    };
    lock(&state).shell.surface_mut().attach();
    log::info!("Web view ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    log::debug!("[LOAD] {}", url);
                    if let Err(e) = webview.load_url(&url) {
                        log::warn!("Failed to load {}: {}", url, e);
                    }
                }
                UserEvent::EvalScript(js) => {
                    if let Err(e) = webview.evaluate_script(&js) {
                        log::warn!("Script evaluation failed: {}", e);
                    }
                }
                UserEvent::SetImmersive(on) => set_immersive(&window, on),
                UserEvent::ToggleImmersive => {
                    let on = window.fullscreen().is_none();
                    set_immersive(&window, on);
                }
                UserEvent::Minimize => window.set_minimized(true),
                UserEvent::ShowAlert { title, message } => show_alert(&title, &message),
                UserEvent::ShowFilePicker {
                    request_code,
                    params,
                } => {
                    let result = pick_files(&params);
                    lock(&state).shell.on_activity_result(request_code, result);
                }
                UserEvent::ExternalLaunchFailed { intent, reason } => {
                    let error = NavigationError::LaunchFailed(reason);
                    lock(&state).shell.on_external_launch_failed(&intent, &error);
                }
                UserEvent::DownloadFinished(outcome) => {
                    let _ = webview.evaluate_script(&download_toast(&outcome));
                }
            },

            _ => {}
        }
    });
}
