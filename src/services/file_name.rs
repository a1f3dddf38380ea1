//! Download file naming: guessing a name from the response hints and making it
//! safe to use as a path component.

use percent_encoding::percent_decode_str;

/// Name used when neither the headers nor the URL yield one.
pub const FALLBACK_FILE_NAME: &str = "downloadfile";

/// Characters that may not appear in a sanitized file name.
pub const RESERVED_CHARS: [char; 9] = ['\\', '/', '<', '>', '*', '?', '|', '"', ':'];

/// Extension ↔ MIME table. The first entry for a MIME type is its preferred
/// extension.
const MIME_TABLE: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("7z", "application/x-7z-compressed"),
    ("apk", "application/vnd.android.package-archive"),
    ("epub", "application/epub+zip"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
];

/// Strips MIME parameters (`; charset=...`) and lowercases the essence.
fn mime_essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase()
}

pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    let essence = mime_essence(mime);
    MIME_TABLE
        .iter()
        .find(|(_, m)| *m == essence)
        .map(|(ext, _)| *ext)
}

pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    MIME_TABLE
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

fn unquote(value: &str) -> String {
    let value = value.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1].replace("\\\"", "\"")
    } else {
        value.to_string()
    }
}

/// Decodes an RFC 5987 `charset'lang'value` parameter. Non-UTF-8 charsets are
/// decoded lossily.
fn decode_ext_value(value: &str) -> Option<String> {
    let mut parts = value.trim().splitn(3, '\'');
    let _charset = parts.next()?;
    let _lang = parts.next()?;
    let encoded = parts.next()?;
    Some(percent_decode_str(encoded).decode_utf8_lossy().to_string())
}

/// Pulls the suggested file name out of a `Content-Disposition` header.
pub fn parse_content_disposition(header: &str) -> Option<String> {
    let mut plain: Option<String> = None;
    for param in header.split(';') {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                if let Some(name) = decode_ext_value(value).filter(|n| !n.is_empty()) {
                    return Some(name);
                }
            }
            "filename" if plain.is_none() => plain = Some(unquote(value)),
            _ => {}
        }
    }
    plain.filter(|n| !n.is_empty())
}

/// Last path segment of `url`, percent-decoded, without query or fragment.
fn name_from_url(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let path = without_fragment.split('?').next().unwrap_or(without_fragment);
    if path.ends_with('/') {
        return None;
    }
    let (before, segment) = path.rsplit_once('/')?;
    // "https://host" has no path segment to speak of.
    if before.ends_with('/') && before.trim_end_matches('/').ends_with(':') {
        return None;
    }
    let decoded = percent_decode_str(segment).decode_utf8_lossy().to_string();
    Some(decoded).filter(|n| !n.is_empty())
}

/// A name made only of dots (or nothing) resolves to a directory, not a file.
pub fn is_usable_file_name(name: &str) -> bool {
    !name.chars().all(|c| c == '.')
}

/// Guesses the name a downloaded resource should be saved under.
///
/// Tries the `Content-Disposition` header, then the URL's last path segment,
/// then [`FALLBACK_FILE_NAME`]. The extension is reconciled with `mime_type`
/// when one is supplied: a missing extension is derived from it, and a known
/// extension that contradicts a known MIME type is replaced.
pub fn guess_file_name(url: &str, content_disposition: &str, mime_type: &str) -> String {
    let mime = Some(mime_type.trim()).filter(|m| !m.is_empty());

    let mut name = parse_content_disposition(content_disposition)
        .map(|n| match n.rsplit_once('/') {
            Some((_, tail)) => tail.to_string(),
            None => n,
        })
        .filter(|n| is_usable_file_name(n))
        .or_else(|| name_from_url(url).filter(|n| is_usable_file_name(n)))
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

    let extension = match name.rfind('.') {
        None => {
            let ext = match mime {
                Some(m) => match extension_for_mime(m) {
                    Some(ext) => ext.to_string(),
                    None if mime_essence(m).starts_with("text/") => "txt".to_string(),
                    None => "bin".to_string(),
                },
                None => "bin".to_string(),
            };
            format!(".{}", ext)
        }
        Some(dot) => {
            let current = name[dot + 1..].to_string();
            let replacement = mime.and_then(|m| {
                let from_ext = mime_for_extension(&current)?;
                if from_ext == mime_essence(m) {
                    return None;
                }
                extension_for_mime(m)
            });
            name.truncate(dot);
            match replacement {
                Some(ext) => format!(".{}", ext),
                None => format!(".{}", current),
            }
        }
    };

    name.push_str(&extension);
    name
}

/// Replaces every run of reserved path characters with a single `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if RESERVED_CHARS.contains(&c) {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
