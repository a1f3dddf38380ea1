//! File name guessing and sanitizing for downloads.

use rstest::rstest;
use webview_shell::services::file_name::{
    extension_for_mime, guess_file_name, mime_for_extension, parse_content_disposition,
    is_usable_file_name, sanitize_file_name, FALLBACK_FILE_NAME,
};

#[rstest]
#[case("https://x.test/report.pdf", "", "", "report.pdf")]
#[case("https://x.test/report.pdf", "", "application/pdf", "report.pdf")]
#[case("https://x.test/files/report.pdf?token=abc#page=2", "", "", "report.pdf")]
#[case("https://x.test/my%20notes.txt", "", "text/plain", "my notes.txt")]
#[case("https://x.test/download", "", "application/zip", "download.zip")]
#[case("https://x.test/download", "", "text/html; charset=utf-8", "download.html")]
#[case("https://x.test/download", "", "text/x-unknown", "download.txt")]
#[case("https://x.test/download", "", "application/x-unknown", "download.bin")]
#[case("https://x.test/download", "", "", "download.bin")]
#[case("https://x.test/", "", "", "downloadfile.bin")]
#[case("https://x.test", "", "application/pdf", "downloadfile.pdf")]
#[case("https://x.test/image.png", "", "image/jpeg", "image.jpg")]
#[case("https://x.test/archive.tar", "", "application/octet-stream", "archive.tar")]
#[case("https://x.test/data.custom", "", "application/pdf", "data.custom")]
fn guesses_name_from_url_and_mime(
    #[case] url: &str,
    #[case] disposition: &str,
    #[case] mime: &str,
    #[case] expected: &str,
) {
    assert_eq!(guess_file_name(url, disposition, mime), expected);
}

#[rstest]
#[case("attachment; filename=\"quarterly.xlsx\"", "quarterly.xlsx")]
#[case("attachment; filename=plain.csv", "plain.csv")]
#[case("inline; filename=\"inline.pdf\"", "inline.pdf")]
#[case("attachment; filename=\"fallback.txt\"; filename*=UTF-8''r%C3%A9sum%C3%A9.txt", "résumé.txt")]
#[case("attachment; FILENAME=\"upper.zip\"", "upper.zip")]
#[case("attachment; filename=\"dir/nested/leaf.png\"", "leaf.png")]
fn disposition_wins_over_url(#[case] disposition: &str, #[case] expected: &str) {
    assert_eq!(
        guess_file_name("https://x.test/ignored.bin", disposition, ""),
        expected
    );
}

#[rstest]
#[case("attachment; filename=\"..\"", "https://x.test/report.pdf", "report.pdf")]
#[case("attachment; filename=\".\"", "https://x.test/report.pdf", "report.pdf")]
#[case("attachment; filename=\"a/..\"", "https://x.test/report.pdf", "report.pdf")]
#[case("attachment; filename*=UTF-8''%2E%2E", "https://x.test/", "downloadfile.bin")]
#[case("", "https://x.test/%2E%2E", "downloadfile.bin")]
#[case("", "https://x.test/...", "downloadfile.bin")]
fn dot_only_names_are_never_used(
    #[case] disposition: &str,
    #[case] url: &str,
    #[case] expected: &str,
) {
    assert_eq!(guess_file_name(url, disposition, ""), expected);
}

#[rstest]
#[case("", false)]
#[case(".", false)]
#[case("..", false)]
#[case("...", false)]
#[case(".hidden", true)]
#[case("a..b", true)]
fn usable_file_names(#[case] name: &str, #[case] usable: bool) {
    assert_eq!(is_usable_file_name(name), usable);
}

#[test]
fn empty_disposition_filename_falls_back_to_url() {
    assert_eq!(
        guess_file_name("https://x.test/from-url.pdf", "attachment; filename=\"\"", ""),
        "from-url.pdf"
    );
}

#[test]
fn disposition_without_filename_is_none() {
    assert_eq!(parse_content_disposition("attachment"), None);
    assert_eq!(parse_content_disposition(""), None);
}

#[test]
fn fallback_name_is_used_without_any_hint() {
    assert!(guess_file_name("https://x.test/", "", "").starts_with(FALLBACK_FILE_NAME));
}

#[rstest]
#[case("report.pdf", "report.pdf")]
#[case("a/b\\c.txt", "a_b_c.txt")]
#[case("what?.txt", "what_.txt")]
#[case("<<>>name**.zip", "_name_.zip")]
#[case("C:\\Users\\me\\x.doc", "C_Users_me_x.doc")]
#[case("say \"hi\" | bye", "say _hi_ _ bye")]
#[case("", "")]
fn sanitizes_reserved_runs(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(sanitize_file_name(input), expected);
}

#[test]
fn mime_table_lookups() {
    assert_eq!(extension_for_mime("application/PDF"), Some("pdf"));
    assert_eq!(extension_for_mime("text/html"), Some("html"));
    assert_eq!(extension_for_mime("*/*"), None);
    assert_eq!(mime_for_extension("JPEG"), Some("image/jpeg"));
    assert_eq!(mime_for_extension("unknown"), None);
}
