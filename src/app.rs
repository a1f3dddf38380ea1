//! Browser Shell core.
//!
//! Owns the rendering surface and the host, and mediates between them: startup
//! configuration, navigation handoff, downloads, the file-chooser round trip
//! and the back action.

use crate::host::{Host, RenderingSurface};
use crate::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use crate::managers::file_chooser_manager::{FileChooserManager, FileChooserManagerTrait};
use crate::services::navigation_policy;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::download::{DownloadEvent, DownloadId};
use crate::types::errors::{DownloadError, NavigationError};
use crate::types::file_chooser::{
    ActivityResult, FileChooserCallback, FileChooserParams, FILE_CHOOSER_REQUEST_CODE,
};
use crate::types::navigation::{BackAction, ExternalIntent, NavigationDecision, NavigationTarget};
use crate::types::settings::ShellSettings;

pub const DOWNLOAD_FAILED_TITLE: &str = "Download failed";
pub const NAVIGATION_FAILED_TITLE: &str = "Cannot open link";

/// The single-window browser shell.
pub struct Shell<S: RenderingSurface, H: Host> {
    surface: S,
    host: H,
    settings: ShellSettings,
    download_manager: DownloadManager,
    file_chooser: FileChooserManager,
    theme: ThemeEngine,
}

impl<S: RenderingSurface, H: Host> Shell<S, H> {
    pub fn new(surface: S, host: H, settings: ShellSettings, download_manager: DownloadManager) -> Self {
        Self {
            surface,
            host,
            settings,
            download_manager,
            file_chooser: FileChooserManager::new(),
            theme: ThemeEngine::detect(false),
        }
    }

    /// Startup sequence: chrome, theme, capabilities, interceptors, start URL.
    pub fn initialize(&mut self) {
        if self.settings.immersive {
            self.host.hide_system_bars();
        }

        self.theme = ThemeEngine::detect(self.host.is_dark_theme());

        self.surface.apply_settings(&self.settings.web_view);
        self.surface.set_long_press_enabled(false);
        self.surface.set_force_dark(self.theme.force_dark());

        log::info!(
            "Shell initialized (dark_mode={}), loading {}",
            self.theme.is_dark(),
            self.settings.start_url
        );
        let start_url = self.settings.start_url.clone();
        self.surface.load_url(&start_url);
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.theme
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Decides whether the surface loads `url` itself or the OS takes it.
    pub fn on_navigation(&mut self, url: &str) -> NavigationDecision {
        match navigation_policy::classify(url) {
            Ok(NavigationTarget::Inline) => {
                log::debug!("Loading inline: {}", url);
                NavigationDecision::Allow
            }
            Ok(NavigationTarget::External(intent)) => {
                if let Err(e) = self.launch_external(&intent) {
                    self.on_external_launch_failed(&intent, &e);
                }
                NavigationDecision::Handled
            }
            Err(e) => {
                log::warn!("Navigation rejected: {}", e);
                self.host.show_alert(NAVIGATION_FAILED_TITLE, &e.to_string());
                NavigationDecision::Handled
            }
        }
    }

    fn launch_external(&mut self, intent: &ExternalIntent) -> Result<(), NavigationError> {
        log::info!("Handing off to external application: {}", intent.uri);
        self.host.launch_external(intent)
    }

    /// Reports a handoff that failed, either at once or after the host's
    /// opener gave up. Loads the intent's web fallback when it has one.
    pub fn on_external_launch_failed(&mut self, intent: &ExternalIntent, error: &NavigationError) {
        log::warn!("External launch of {} failed: {}", intent.original, error);
        match navigation_policy::inline_fallback(intent) {
            Some(fallback) => {
                let fallback = fallback.to_string();
                self.surface.load_url(&fallback);
            }
            None => self.host.show_alert(NAVIGATION_FAILED_TITLE, &error.to_string()),
        }
    }

    /// Enqueues the download with the host and opens its downloads listing.
    /// Failures end in an alert and go no further.
    pub fn on_download(&mut self, event: &DownloadEvent) -> Option<DownloadId> {
        match self.try_download(event) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("Download of {} failed: {}", event.url, e);
                self.host.show_alert(
                    DOWNLOAD_FAILED_TITLE,
                    &format!("Unable to download file: {}", e),
                );
                None
            }
        }
    }

    fn try_download(&mut self, event: &DownloadEvent) -> Result<DownloadId, DownloadError> {
        let request = self.download_manager.build_request(event)?;
        log::info!(
            "Enqueueing download {} ({}) to {}",
            request.title,
            request.mime_type,
            request.destination.display()
        );
        let id = self.host.enqueue_download(request)?;
        self.host.open_downloads_view()?;
        Ok(id)
    }

    /// Takes over a file-input request from the page.
    pub fn on_show_file_chooser(&mut self, params: FileChooserParams, callback: FileChooserCallback) -> bool {
        if self.file_chooser.begin(FILE_CHOOSER_REQUEST_CODE, callback) {
            log::warn!("File chooser reopened before the previous one resolved");
        }
        if let Err(e) = self.host.launch_file_picker(FILE_CHOOSER_REQUEST_CODE, &params) {
            log::warn!("{}", e);
            self.file_chooser
                .resolve(FILE_CHOOSER_REQUEST_CODE, ActivityResult::Canceled);
        }
        true
    }

    /// Delivers a host activity result. Unknown request codes are ignored.
    pub fn on_activity_result(&mut self, request_code: i32, result: ActivityResult) {
        if request_code != FILE_CHOOSER_REQUEST_CODE {
            return;
        }
        if !self.file_chooser.resolve(request_code, result) {
            log::debug!("Activity result {} with no pending request", request_code);
        }
    }

    pub fn has_pending_file_chooser(&self) -> bool {
        self.file_chooser.is_pending()
    }

    /// Steps back in the surface history, or backgrounds the app when there
    /// is nothing to go back to.
    pub fn on_back_pressed(&mut self) -> BackAction {
        if self.surface.can_go_back() {
            self.surface.go_back();
            BackAction::WentBack
        } else {
            self.host.move_to_background();
            BackAction::MovedToBackground
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
