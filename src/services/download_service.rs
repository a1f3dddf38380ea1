//! HTTP download service used as the host download manager on desktop.
//!
//! `enqueue` reserves the destination file and returns at once; the transfer
//! runs on the service's own tokio runtime. Callers never poll: the optional
//! notifier hears about the final outcome.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::services::file_name::is_usable_file_name;
use crate::types::download::{DownloadId, DownloadOutcome, DownloadRequest, NotificationVisibility};
use crate::types::errors::DownloadError;

/// Receives the final outcome of a transfer.
pub type DownloadNotifier = Arc<dyn Fn(DownloadOutcome) + Send + Sync>;

/// Highest numeric suffix tried before giving up on a free file name.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Trait defining the download service interface.
pub trait DownloadServiceTrait {
    fn enqueue(&self, request: DownloadRequest) -> Result<DownloadId, DownloadError>;
}

pub struct DownloadService {
    runtime: Runtime,
    client: reqwest::Client,
    notifier: Option<DownloadNotifier>,
}

impl DownloadService {
    pub fn new() -> Result<Self, DownloadError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("download-worker")
            .enable_all()
            .build()
            .map_err(|e| DownloadError::ServiceUnavailable(e.to_string()))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DownloadError::ServiceUnavailable(e.to_string()))?;

        Ok(Self {
            runtime,
            client,
            notifier: None,
        })
    }

    /// Replaces the HTTP client, e.g. to bypass system proxies.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_notifier(mut self, notifier: DownloadNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

/// `dir/name.ext`, `dir/name-1.ext`, `dir/name-2.ext`, ...
fn candidate_path(path: &Path, attempt: u32) -> PathBuf {
    if attempt == 0 {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, attempt, ext.to_string_lossy()),
        None => format!("{}-{}", stem, attempt),
    };
    path.with_file_name(name)
}

/// Creates the first free destination next to `path` and returns it with an
/// open handle, so concurrent downloads of the same name never clobber each
/// other.
pub fn reserve_destination(path: &Path) -> Result<(PathBuf, File), DownloadError> {
    // `Path::file_name` hides a trailing `.`, so inspect the raw last segment.
    let raw = path.as_os_str().to_string_lossy();
    let last_segment = raw.rsplit(std::path::is_separator).next().unwrap_or("");
    if !is_usable_file_name(last_segment) || path.file_name().is_none() {
        return Err(DownloadError::FileSystemError(format!(
            "Not a file name: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DownloadError::FileSystemError(format!("{}: {}", parent.display(), e))
        })?;
    }

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let candidate = candidate_path(path, attempt);
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(DownloadError::FileSystemError(format!(
                    "{}: {}",
                    candidate.display(),
                    e
                )))
            }
        }
    }

    Err(DownloadError::FileSystemError(format!(
        "No free file name for {}",
        path.display()
    )))
}

async fn transfer(
    client: reqwest::Client,
    request: &DownloadRequest,
    file: File,
) -> Result<u64, DownloadError> {
    let mut builder = client.get(request.url.clone());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| DownloadError::NetworkError(e.to_string()))?;

    let mut file = tokio::fs::File::from_std(file);
    let mut written = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| DownloadError::NetworkError(e.to_string()))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| DownloadError::FileSystemError(e.to_string()))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .map_err(|e| DownloadError::FileSystemError(e.to_string()))?;

    Ok(written)
}

impl DownloadServiceTrait for DownloadService {
    fn enqueue(&self, request: DownloadRequest) -> Result<DownloadId, DownloadError> {
        if !matches!(request.url.scheme(), "http" | "https") {
            return Err(DownloadError::InvalidUrl(request.url.to_string()));
        }

        let (path, file) = reserve_destination(&request.destination)?;
        let id = DownloadId(Uuid::new_v4().to_string());
        log::info!("Download {} queued: {} -> {}", id.0, request.url, path.display());

        let client = self.client.clone();
        let notifier = self
            .notifier
            .clone()
            .filter(|_| request.notification == NotificationVisibility::VisibleNotifyCompleted);
        let task_id = id.clone();

        self.runtime.spawn(async move {
            let outcome = match transfer(client, &request, file).await {
                Ok(bytes) => {
                    log::info!("Download {} finished: {} bytes", task_id.0, bytes);
                    DownloadOutcome::Completed {
                        id: task_id,
                        title: request.title.clone(),
                        path,
                        bytes,
                    }
                }
                Err(e) => {
                    log::warn!("Download {} failed: {}", task_id.0, e);
                    let _ = tokio::fs::remove_file(&path).await;
                    DownloadOutcome::Failed {
                        id: task_id,
                        title: request.title.clone(),
                        reason: e.to_string(),
                    }
                }
            };
            if let Some(notify) = notifier {
                notify(outcome);
            }
        });

        Ok(id)
    }
}
