//! Property-based tests for download file naming.
//!
//! Whatever the server or URL supplies, the stored name must be a single
//! path component with no reserved characters.

use proptest::prelude::*;
use webview_shell::managers::download_manager::{download_title, DownloadManager, DownloadManagerTrait};
use webview_shell::services::file_name::{guess_file_name, sanitize_file_name, RESERVED_CHARS};
use webview_shell::types::download::DownloadEvent;

fn arb_raw_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._\\\\/<>*?|\":-]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_sanitized_name_has_no_reserved_chars(name in arb_raw_name()) {
        let clean = sanitize_file_name(&name);
        prop_assert!(!clean.chars().any(|c| RESERVED_CHARS.contains(&c)));
        prop_assert!(clean.chars().count() <= name.chars().count());
    }

    #[test]
    fn prop_sanitize_keeps_clean_names(name in "[a-zA-Z0-9 ._-]{1,40}") {
        prop_assert_eq!(sanitize_file_name(&name), name);
    }

    #[test]
    fn prop_sanitize_is_idempotent(name in arb_raw_name()) {
        let once = sanitize_file_name(&name);
        prop_assert_eq!(sanitize_file_name(&once), once.clone());
    }

    #[test]
    fn prop_guessed_and_sanitized_name_is_single_component(
        host in "[a-z]{3,10}",
        path in "[a-zA-Z0-9%/._-]{0,30}",
        disposition in "[a-zA-Z0-9 =;\"/\\\\.:*]{0,40}",
        mime in prop_oneof![Just(""), Just("application/pdf"), Just("text/plain"), Just("image/png")],
    ) {
        let url = format!("https://{}.test/{}", host, path);
        let name = sanitize_file_name(&guess_file_name(&url, &disposition, mime));
        prop_assert!(!name.is_empty());
        prop_assert!(!name.contains('/'));
        prop_assert!(!name.contains('\\'));
        prop_assert!(name.chars().any(|c| c != '.'));
    }

    #[test]
    fn prop_download_destination_stays_in_downloads_dir(
        disposition_name in prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just("../..".to_string()),
            "[a-z./\\\\]{0,12}",
        ],
        path in prop_oneof![Just("..".to_string()), Just("%2E".to_string()), "[a-z.%/]{0,12}"],
    ) {
        let downloads = std::path::PathBuf::from("/home/user/Downloads");
        let event = DownloadEvent {
            url: format!("https://x.test/{}", path),
            user_agent: String::new(),
            content_disposition: format!("attachment; filename=\"{}\"", disposition_name),
            mime_type: String::new(),
            content_length: None,
        };
        let title = download_title(&event);
        prop_assert!(title.chars().any(|c| c != '.'));

        let request = DownloadManager::new(downloads.clone()).build_request(&event).unwrap();
        prop_assert_eq!(request.destination.parent(), Some(downloads.as_path()));
        prop_assert_eq!(request.destination.file_name().and_then(|n| n.to_str()), Some(title.as_str()));
    }
}
