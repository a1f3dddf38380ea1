//! Host collaborators the shell talks to.
//!
//! The shell never touches a window, a web engine or the OS directly. It goes
//! through these two traits, which the desktop backend implements on top of
//! `tao`/`wry` and which tests implement with recording fakes.

use crate::types::download::{DownloadId, DownloadRequest};
use crate::types::errors::{DownloadError, FileChooserError, NavigationError};
use crate::types::file_chooser::FileChooserParams;
use crate::types::navigation::ExternalIntent;
use crate::types::settings::{ForceDark, WebViewSettings};

/// The embedded web view.
pub trait RenderingSurface {
    fn apply_settings(&mut self, settings: &WebViewSettings);
    fn set_force_dark(&mut self, mode: ForceDark);
    fn set_long_press_enabled(&mut self, enabled: bool);
    fn load_url(&mut self, url: &str);
    fn can_go_back(&self) -> bool;
    fn go_back(&mut self);
}

/// Operating-system services outside the web view.
pub trait Host {
    /// Edge-to-edge presentation; system bars reappear transiently on request.
    fn hide_system_bars(&mut self);
    /// Whether the OS currently prefers a dark theme.
    fn is_dark_theme(&self) -> bool;
    /// Hands a URI to the OS resolver.
    fn launch_external(&mut self, intent: &ExternalIntent) -> Result<(), NavigationError>;
    fn enqueue_download(&mut self, request: DownloadRequest) -> Result<DownloadId, DownloadError>;
    fn open_downloads_view(&mut self) -> Result<(), DownloadError>;
    /// Blocking informational dialog with a single OK button.
    fn show_alert(&mut self, title: &str, message: &str);
    fn launch_file_picker(
        &mut self,
        request_code: i32,
        params: &FileChooserParams,
    ) -> Result<(), FileChooserError>;
    /// Sends the application to the background without terminating it.
    fn move_to_background(&mut self);
}
