//! Download request builder.
//!
//! Turns a download event from the web view into a [`DownloadRequest`] the
//! host download service can enqueue. Nothing is tracked after that.

use std::path::{Path, PathBuf};

use url::Url;

use crate::services::file_name::{
    guess_file_name, is_usable_file_name, sanitize_file_name, FALLBACK_FILE_NAME,
};
use crate::types::download::{DownloadEvent, DownloadRequest, NotificationVisibility, WILDCARD_MIME};
use crate::types::errors::DownloadError;

/// Trait defining download request construction.
pub trait DownloadManagerTrait {
    fn build_request(&self, event: &DownloadEvent) -> Result<DownloadRequest, DownloadError>;
    fn downloads_dir(&self) -> &Path;
}

/// Builds requests targeting a public downloads directory.
pub struct DownloadManager {
    downloads_dir: PathBuf,
}

impl DownloadManager {
    pub fn new(downloads_dir: PathBuf) -> Self {
        Self { downloads_dir }
    }
}

/// Name the download will be saved and shown under. Always a single path
/// component inside the downloads directory.
pub fn download_title(event: &DownloadEvent) -> String {
    let title = sanitize_file_name(&guess_file_name(
        &event.url,
        &event.content_disposition,
        &event.mime_type,
    ));
    if is_usable_file_name(&title) {
        title
    } else {
        FALLBACK_FILE_NAME.to_string()
    }
}

impl DownloadManagerTrait for DownloadManager {
    fn build_request(&self, event: &DownloadEvent) -> Result<DownloadRequest, DownloadError> {
        let url = Url::parse(&event.url)
            .map_err(|e| DownloadError::InvalidUrl(format!("{}: {}", event.url, e)))?;

        let title = download_title(event);
        let mime_type = if event.mime_type.trim().is_empty() {
            WILDCARD_MIME.to_string()
        } else {
            event.mime_type.clone()
        };

        // An unknown user agent is left to the HTTP client's default.
        let headers = match event.user_agent.trim() {
            "" => Vec::new(),
            ua => vec![("User-Agent".to_string(), ua.to_string())],
        };

        Ok(DownloadRequest {
            url,
            mime_type,
            headers,
            description: format!("Downloading {}", title),
            destination: self.downloads_dir.join(&title),
            title,
            notification: NotificationVisibility::VisibleNotifyCompleted,
        })
    }

    fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }
}
