//! `tao`/`wry` implementations of the shell's host traits.
//!
//! Neither type touches the window or the web view directly: both post
//! [`UserEvent`]s that the event loop applies. Before the web view exists,
//! [`ProxySurface`] records what the shell asks for so the builder can be
//! configured from it.

use std::io;
use std::path::PathBuf;
use std::process::Child;
use std::thread;

use tao::event_loop::EventLoopProxy;

use crate::host::{Host, RenderingSurface};
use crate::platform;
use crate::services::download_service::{DownloadService, DownloadServiceTrait};
use crate::types::download::{DownloadId, DownloadOutcome, DownloadRequest};
use crate::types::errors::{DownloadError, FileChooserError, NavigationError};
use crate::types::file_chooser::FileChooserParams;
use crate::types::navigation::ExternalIntent;
use crate::types::settings::{ForceDark, WebViewSettings};

#[derive(Debug)]
pub enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    SetImmersive(bool),
    ToggleImmersive,
    Minimize,
    ShowAlert { title: String, message: String },
    ShowFilePicker { request_code: i32, params: FileChooserParams },
    DownloadFinished(DownloadOutcome),
    /// The system opener exited without handling the intent.
    ExternalLaunchFailed { intent: ExternalIntent, reason: String },
}

/// What the shell configured on the surface before it was built.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub settings: WebViewSettings,
    pub force_dark: ForceDark,
    pub long_press_enabled: bool,
    pub start_url: Option<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            settings: WebViewSettings::default(),
            force_dark: ForceDark::Off,
            long_press_enabled: true,
            start_url: None,
        }
    }
}

pub struct ProxySurface {
    proxy: EventLoopProxy<UserEvent>,
    config: SurfaceConfig,
    attached: bool,
    can_go_back: bool,
}

impl ProxySurface {
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy,
            config: SurfaceConfig::default(),
            attached: false,
            can_go_back: false,
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Called once the web view exists; later loads go through the event loop.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Page-reported history state.
    pub fn set_can_go_back(&mut self, can_go_back: bool) {
        self.can_go_back = can_go_back;
    }

    fn send(&self, event: UserEvent) {
        if let Err(e) = self.proxy.send_event(event) {
            log::warn!("Event loop closed: {:?}", e.0);
        }
    }
}

impl RenderingSurface for ProxySurface {
    fn apply_settings(&mut self, settings: &WebViewSettings) {
        if self.attached {
            log::warn!("Capabilities are fixed once the web view is built");
            return;
        }
        self.config.settings = settings.clone();
    }

    fn set_force_dark(&mut self, mode: ForceDark) {
        self.config.force_dark = mode;
    }

    fn set_long_press_enabled(&mut self, enabled: bool) {
        self.config.long_press_enabled = enabled;
    }

    fn load_url(&mut self, url: &str) {
        if self.attached {
            self.send(UserEvent::LoadUrl(url.to_string()));
        } else {
            self.config.start_url = Some(url.to_string());
        }
    }

    fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    fn go_back(&mut self) {
        // The page reports fresh state after the traversal lands.
        self.can_go_back = false;
        self.send(UserEvent::EvalScript("window.history.back()".to_string()));
    }
}

/// Waits for an opener off the UI thread and calls `on_failure` if it found
/// no handler.
fn watch_opener<F>(child: Child, on_failure: F)
where
    F: FnOnce(io::Error) + Send + 'static,
{
    let spawned = thread::Builder::new()
        .name("opener-wait".to_string())
        .spawn(move || {
            if let Err(e) = platform::wait_for_opener(child) {
                on_failure(e);
            }
        });
    if let Err(e) = spawned {
        log::warn!("Could not watch the system opener: {}", e);
    }
}

pub struct DesktopHost {
    proxy: EventLoopProxy<UserEvent>,
    dark_theme: bool,
    downloads: DownloadService,
    downloads_dir: PathBuf,
}

impl DesktopHost {
    pub fn new(
        proxy: EventLoopProxy<UserEvent>,
        dark_theme: bool,
        downloads: DownloadService,
        downloads_dir: PathBuf,
    ) -> Self {
        Self {
            proxy,
            dark_theme,
            downloads,
            downloads_dir,
        }
    }

    fn send(&self, event: UserEvent) -> Result<(), String> {
        self.proxy
            .send_event(event)
            .map_err(|e| format!("event loop closed while sending {:?}", e.0))
    }
}

impl Host for DesktopHost {
    fn hide_system_bars(&mut self) {
        if let Err(e) = self.send(UserEvent::SetImmersive(true)) {
            log::warn!("{}", e);
        }
    }

    fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    fn launch_external(&mut self, intent: &ExternalIntent) -> Result<(), NavigationError> {
        if intent.package.is_some() || intent.action.is_some() {
            log::debug!(
                "Ignoring package/action hints on desktop: {:?} {:?}",
                intent.package,
                intent.action
            );
        }
        let child = platform::open_with_system(&intent.uri)
            .map_err(|e| NavigationError::LaunchFailed(format!("{}: {}", intent.uri, e)))?;

        let proxy = self.proxy.clone();
        let intent = intent.clone();
        watch_opener(child, move |e| {
            let reason = format!("{}: {}", intent.uri, e);
            if proxy
                .send_event(UserEvent::ExternalLaunchFailed { intent, reason })
                .is_err()
            {
                log::warn!("Event loop closed before a launch failure was reported");
            }
        });
        Ok(())
    }

    fn enqueue_download(&mut self, request: DownloadRequest) -> Result<DownloadId, DownloadError> {
        self.downloads.enqueue(request)
    }

    fn open_downloads_view(&mut self) -> Result<(), DownloadError> {
        let target = self.downloads_dir.to_string_lossy().to_string();
        let child = platform::open_with_system(&target)
            .map_err(|e| DownloadError::ServiceUnavailable(e.to_string()))?;
        watch_opener(child, move |e| {
            log::warn!("Could not show downloads folder {}: {}", target, e);
        });
        Ok(())
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        let event = UserEvent::ShowAlert {
            title: title.to_string(),
            message: message.to_string(),
        };
        if let Err(e) = self.send(event) {
            log::warn!("{}", e);
        }
    }

    fn launch_file_picker(
        &mut self,
        request_code: i32,
        params: &FileChooserParams,
    ) -> Result<(), FileChooserError> {
        self.send(UserEvent::ShowFilePicker {
            request_code,
            params: params.clone(),
        })
        .map_err(FileChooserError::LaunchFailed)
    }

    fn move_to_background(&mut self) {
        if let Err(e) = self.send(UserEvent::Minimize) {
            log::warn!("{}", e);
        }
    }
}
