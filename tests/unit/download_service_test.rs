//! Download service: destination reservation and transfers against a local
//! one-shot HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use webview_shell::services::download_service::{
    reserve_destination, DownloadService, DownloadServiceTrait,
};
use webview_shell::types::download::{DownloadOutcome, DownloadRequest, NotificationVisibility};
use webview_shell::types::errors::DownloadError;

fn service() -> DownloadService {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    DownloadService::new().unwrap().with_client(client)
}

fn request(url: &str, destination: PathBuf) -> DownloadRequest {
    DownloadRequest {
        url: url::Url::parse(url).unwrap(),
        mime_type: "*/*".to_string(),
        headers: vec![("User-Agent".to_string(), "ShellTest/1.0".to_string())],
        title: "report.pdf".to_string(),
        description: "Downloading report.pdf".to_string(),
        destination,
        notification: NotificationVisibility::VisibleNotifyCompleted,
    }
}

/// Serves `body` once and hands back the raw request head.
fn serve_once(body: &'static [u8]) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let _ = tx.send(String::from_utf8_lossy(&head).to_string());
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
    });
    (format!("http://{}/report.pdf", addr), rx)
}

#[test]
fn reserve_destination_avoids_existing_files() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("report.pdf");

    let (first, _) = reserve_destination(&target).unwrap();
    let (second, _) = reserve_destination(&target).unwrap();
    let (third, _) = reserve_destination(&target).unwrap();

    assert_eq!(first, target);
    assert_eq!(second, dir.path().join("report-1.pdf"));
    assert_eq!(third, dir.path().join("report-2.pdf"));
}

#[test]
fn reserve_destination_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested").join("Downloads").join("notes");

    let (path, _) = reserve_destination(&target).unwrap();
    assert_eq!(path, target);
    assert!(path.exists());
}

#[test]
fn reserve_destination_rejects_directory_like_paths() {
    let dir = TempDir::new().unwrap();
    let downloads = dir.path().join("Downloads");
    std::fs::create_dir_all(&downloads).unwrap();

    for target in [downloads.join(".."), downloads.join("."), downloads.join("")] {
        let err = reserve_destination(&target).unwrap_err();
        assert!(matches!(err, DownloadError::FileSystemError(_)), "{}", target.display());
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn non_http_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let service = service();

    let err = service
        .enqueue(request("ftp://x.test/report.pdf", dir.path().join("report.pdf")))
        .unwrap_err();
    assert!(matches!(err, DownloadError::InvalidUrl(_)));
    assert!(!dir.path().join("report.pdf").exists());
}

#[test]
fn transfer_writes_file_and_sends_user_agent() {
    let dir = TempDir::new().unwrap();
    let (url, heads) = serve_once(b"%PDF-1.4 test");
    let (tx, rx) = mpsc::channel();
    let tx = std::sync::Mutex::new(tx);
    let service = service()
        .with_notifier(Arc::new(move |outcome| {
            let _ = tx.lock().unwrap().send(outcome);
        }));

    let id = service
        .enqueue(request(&url, dir.path().join("report.pdf")))
        .unwrap();

    let head = heads.recv_timeout(Duration::from_secs(10)).unwrap();
    assert!(head.to_ascii_lowercase().contains("user-agent: shelltest/1.0"));

    match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
        DownloadOutcome::Completed { id: done, path, bytes, title } => {
            assert_eq!(done, id);
            assert_eq!(title, "report.pdf");
            assert_eq!(bytes, 13);
            assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.4 test");
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn failed_transfer_removes_partial_file() {
    let dir = TempDir::new().unwrap();
    // Bind then drop to get a port nothing listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    let tx = std::sync::Mutex::new(tx);
    let service = service()
        .with_notifier(Arc::new(move |outcome| {
            let _ = tx.lock().unwrap().send(outcome);
        }));

    let destination = dir.path().join("report.pdf");
    service
        .enqueue(request(&format!("http://127.0.0.1:{}/report.pdf", port), destination.clone()))
        .unwrap();

    match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
        DownloadOutcome::Failed { reason, .. } => assert!(reason.contains("network")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(!destination.exists());
}
