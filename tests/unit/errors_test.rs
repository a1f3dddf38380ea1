use webview_shell::types::errors::*;

// === NavigationError Tests ===

#[test]
fn navigation_error_display_variants() {
    assert_eq!(
        NavigationError::MalformedUri("::".to_string()).to_string(),
        "Malformed URI: ::"
    );
    assert_eq!(
        NavigationError::Unresolvable("intent://x".to_string()).to_string(),
        "No application can handle: intent://x"
    );
    assert_eq!(
        NavigationError::LaunchFailed("no handler".to_string()).to_string(),
        "External launch failed: no handler"
    );
}

#[test]
fn navigation_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(NavigationError::MalformedUri("x".to_string()));
    assert!(err.source().is_none());
}

// === DownloadError Tests ===

#[test]
fn download_error_display_variants() {
    assert_eq!(
        DownloadError::InvalidUrl("ftp://x".to_string()).to_string(),
        "Invalid URL: ftp://x"
    );
    assert_eq!(
        DownloadError::ServiceUnavailable("runtime".to_string()).to_string(),
        "Download service unavailable: runtime"
    );
    assert_eq!(
        DownloadError::FileSystemError("read-only".to_string()).to_string(),
        "Download file system error: read-only"
    );
    assert_eq!(
        DownloadError::NetworkError("timeout".to_string()).to_string(),
        "Download network error: timeout"
    );
}

// === FileChooserError Tests ===

#[test]
fn file_chooser_error_display_variants() {
    assert_eq!(
        FileChooserError::LaunchFailed("closed".to_string()).to_string(),
        "File picker launch failed: closed"
    );
    assert_eq!(
        FileChooserError::ReadFailed("/tmp/x".to_string()).to_string(),
        "Selected file could not be read: /tmp/x"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidValue("start_url".to_string()).to_string(),
        "Invalid settings value: start_url"
    );
}
