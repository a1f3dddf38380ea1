use std::fmt;

// === NavigationError ===

/// Errors raised while handing a navigation off to an external application.
#[derive(Debug)]
pub enum NavigationError {
    /// The URL could not be parsed at all.
    MalformedUri(String),
    /// The URL parsed, but no target could be resolved from it.
    Unresolvable(String),
    /// The host refused or failed to launch the resolved target.
    LaunchFailed(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::MalformedUri(url) => write!(f, "Malformed URI: {}", url),
            NavigationError::Unresolvable(url) => {
                write!(f, "No application can handle: {}", url)
            }
            NavigationError::LaunchFailed(msg) => {
                write!(f, "External launch failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for NavigationError {}

// === DownloadError ===

/// Errors raised while building or enqueueing a download request.
#[derive(Debug)]
pub enum DownloadError {
    /// The download URL is not a valid http(s) URL.
    InvalidUrl(String),
    /// The host download service is unavailable.
    ServiceUnavailable(String),
    /// A file system error occurred while preparing the destination.
    FileSystemError(String),
    /// A network error occurred during the transfer.
    NetworkError(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            DownloadError::ServiceUnavailable(msg) => {
                write!(f, "Download service unavailable: {}", msg)
            }
            DownloadError::FileSystemError(msg) => {
                write!(f, "Download file system error: {}", msg)
            }
            DownloadError::NetworkError(msg) => write!(f, "Download network error: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

// === FileChooserError ===

/// Errors raised by the host file picker.
#[derive(Debug)]
pub enum FileChooserError {
    /// The picker could not be shown.
    LaunchFailed(String),
    /// A selected file could not be read.
    ReadFailed(String),
}

impl fmt::Display for FileChooserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileChooserError::LaunchFailed(msg) => {
                write!(f, "File picker launch failed: {}", msg)
            }
            FileChooserError::ReadFailed(msg) => {
                write!(f, "Selected file could not be read: {}", msg)
            }
        }
    }
}

impl std::error::Error for FileChooserError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
