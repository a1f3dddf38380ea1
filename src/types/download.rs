use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// MIME type used when the page does not supply one.
pub const WILDCARD_MIME: &str = "*/*";

/// A download announced by the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadEvent {
    pub url: String,
    pub user_agent: String,
    pub content_disposition: String,
    pub mime_type: String,
    pub content_length: Option<u64>,
}

/// When the host shows a notification for a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationVisibility {
    Hidden,
    Visible,
    VisibleNotifyCompleted,
}

/// A request handed to the host download service. Built once per download
/// event; the shell keeps no reference to it after enqueueing.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub url: url::Url,
    pub mime_type: String,
    pub headers: Vec<(String, String)>,
    pub title: String,
    pub description: String,
    pub destination: PathBuf,
    pub notification: NotificationVisibility,
}

impl DownloadRequest {
    pub fn user_agent(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("User-Agent"))
            .map(|(_, value)| value.as_str())
    }
}

/// Opaque id the download service assigns on enqueue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownloadId(pub String);

/// Final state of a transfer, reported by the download service.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    Completed {
        id: DownloadId,
        title: String,
        path: PathBuf,
        bytes: u64,
    },
    Failed {
        id: DownloadId,
        title: String,
        reason: String,
    },
}
