//! webview-shell: a single full-screen web view pointed at a fixed start URL.
//!
//! Entry point: initializes logging, applies command-line settings overrides
//! and runs the desktop shell window.
//! When built without the `gui` feature, walks the shell through a console
//! session against a printing host instead.

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Persists `--start-url`, `--user-agent` and `--reset-settings` overrides.
fn apply_settings_overrides() -> Result<(), webview_shell::types::errors::SettingsError> {
    use webview_shell::cli;
    use webview_shell::services::settings_engine::SettingsEngine;

    let commands = cli::parse_args(std::env::args().skip(1))?;
    cli::apply_commands(&mut SettingsEngine::new(None), &commands)
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    if let Err(e) = apply_settings_overrides() {
        log::error!("{}", e);
        std::process::exit(2);
    }
    webview_shell::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    if let Err(e) = apply_settings_overrides() {
        log::error!("{}", e);
        std::process::exit(2);
    }
    console::run();
}

#[cfg(not(feature = "gui"))]
mod console {
    use webview_shell::app::Shell;
    use webview_shell::host::{Host, RenderingSurface};
    use webview_shell::managers::download_manager::DownloadManager;
    use webview_shell::platform;
    use webview_shell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    use webview_shell::types::download::{DownloadEvent, DownloadId, DownloadRequest};
    use webview_shell::types::errors::{DownloadError, FileChooserError, NavigationError};
    use webview_shell::types::file_chooser::{ActivityResult, FileChooserParams, FILE_CHOOSER_REQUEST_CODE};
    use webview_shell::types::navigation::ExternalIntent;
    use webview_shell::types::settings::{ForceDark, WebViewSettings};

    #[derive(Default)]
    struct PrintSurface {
        history: Vec<String>,
    }

    impl RenderingSurface for PrintSurface {
        fn apply_settings(&mut self, settings: &WebViewSettings) {
            println!("  surface: javascript={} zoom={} mixed={:?}",
                settings.javascript_enabled, settings.zoom_enabled(), settings.mixed_content_mode);
        }
        fn set_force_dark(&mut self, mode: ForceDark) {
            println!("  surface: force dark {:?}", mode);
        }
        fn set_long_press_enabled(&mut self, enabled: bool) {
            println!("  surface: long press enabled = {}", enabled);
        }
        fn load_url(&mut self, url: &str) {
            println!("  surface: load {}", url);
            self.history.push(url.to_string());
        }
        fn can_go_back(&self) -> bool {
            self.history.len() > 1
        }
        fn go_back(&mut self) {
            self.history.pop();
            println!("  surface: back to {:?}", self.history.last());
        }
    }

    struct PrintHost;

    impl Host for PrintHost {
        fn hide_system_bars(&mut self) {
            println!("  host: system bars hidden");
        }
        fn is_dark_theme(&self) -> bool {
            false
        }
        fn launch_external(&mut self, intent: &ExternalIntent) -> Result<(), NavigationError> {
            println!("  host: launch {} (new_task={})", intent.uri, intent.flags.new_task);
            Ok(())
        }
        fn enqueue_download(&mut self, request: DownloadRequest) -> Result<DownloadId, DownloadError> {
            println!("  host: enqueue {} as {} ({})", request.url, request.title, request.mime_type);
            Ok(DownloadId("console-1".to_string()))
        }
        fn open_downloads_view(&mut self) -> Result<(), DownloadError> {
            println!("  host: downloads view opened");
            Ok(())
        }
        fn show_alert(&mut self, title: &str, message: &str) {
            println!("  host: [{}] {}", title, message);
        }
        fn launch_file_picker(&mut self, request_code: i32, _params: &FileChooserParams) -> Result<(), FileChooserError> {
            println!("  host: file picker launched (request {})", request_code);
            Ok(())
        }
        fn move_to_background(&mut self) {
            println!("  host: moved to background");
        }
    }

    pub fn run() {
        let mut engine = SettingsEngine::new(None);
        let settings = engine.load().unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            Default::default()
        });

        println!("Startup");
        let mut shell = Shell::new(
            PrintSurface::default(),
            PrintHost,
            settings,
            DownloadManager::new(platform::get_downloads_dir()),
        );
        shell.initialize();

        println!("Navigation");
        for url in ["https://example.com/docs", "mailto:someone@example.com", "about:blank"] {
            let decision = shell.on_navigation(url);
            println!("  {} -> {:?}", url, decision);
        }

        println!("Download");
        shell.on_download(&DownloadEvent {
            url: "https://x.test/report.pdf".to_string(),
            user_agent: "webview-shell/console".to_string(),
            content_disposition: String::new(),
            mime_type: String::new(),
            content_length: None,
        });

        println!("File chooser");
        shell.on_show_file_chooser(
            FileChooserParams::default(),
            Box::new(|selection| println!("  page: received {:?}", selection)),
        );
        shell.on_activity_result(FILE_CHOOSER_REQUEST_CODE, ActivityResult::Canceled);

        println!("Back");
        shell.surface_mut().load_url("https://example.com/docs");
        println!("  {:?}", shell.on_back_pressed());
        println!("  {:?}", shell.on_back_pressed());
    }
}
