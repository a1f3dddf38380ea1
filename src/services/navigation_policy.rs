//! Navigation scheme policy.
//!
//! http, https and the in-app `about:` pseudo-scheme stay in the web view.
//! Everything else is turned into an [`ExternalIntent`] for the OS resolver.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::types::errors::NavigationError;
use crate::types::navigation::{ExternalIntent, LaunchFlags, NavigationTarget};

/// Schemes loaded inside the rendering surface.
pub const INLINE_SCHEMES: [&str; 3] = ["http", "https", "about"];

const INTENT_SCHEME: &str = "intent";
const INTENT_MARKER: &str = "#Intent;";

/// Returns true when `url` must be loaded in place.
pub fn is_inline(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) => INLINE_SCHEMES
            .iter()
            .any(|s| s.eq_ignore_ascii_case(scheme.trim())),
        None => false,
    }
}

/// Decides where a navigation goes.
pub fn classify(url: &str) -> Result<NavigationTarget, NavigationError> {
    if is_inline(url) {
        return Ok(NavigationTarget::Inline);
    }
    resolve_external(url).map(NavigationTarget::External)
}

/// Resolves a non-inline URL into a launch request with the new-task flag set.
pub fn resolve_external(url: &str) -> Result<ExternalIntent, NavigationError> {
    let parsed = Url::parse(url).map_err(|e| NavigationError::MalformedUri(format!("{}: {}", url, e)))?;

    let mut intent = if parsed.scheme() == INTENT_SCHEME {
        parse_intent_uri(url)?
    } else {
        ExternalIntent {
            original: url.to_string(),
            uri: url.to_string(),
            package: None,
            action: None,
            fallback_url: None,
            flags: LaunchFlags::default(),
        }
    };
    intent.flags.new_task = true;
    Ok(intent)
}

/// Parses an `intent://host/path#Intent;scheme=x;package=y;end` deep link.
///
/// The target URI is the part before the `#Intent;` block with its scheme
/// swapped for the one named inside the block.
pub fn parse_intent_uri(url: &str) -> Result<ExternalIntent, NavigationError> {
    let (base, block) = match url.find(INTENT_MARKER) {
        Some(idx) => (&url[..idx], &url[idx + INTENT_MARKER.len()..]),
        None => (url, ""),
    };

    let mut scheme = None;
    let mut package = None;
    let mut action = None;
    let mut fallback_url = None;

    for entry in block.split(';') {
        if entry == "end" || entry.is_empty() {
            continue;
        }
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        let value = percent_decode_str(value).decode_utf8_lossy().to_string();
        match key {
            "scheme" => scheme = Some(value),
            "package" => package = Some(value),
            "action" => action = Some(value),
            "S.browser_fallback_url" => fallback_url = Some(value),
            _ => {}
        }
    }

    let rest = base
        .get(INTENT_SCHEME.len()..)
        .filter(|r| r.starts_with(':'))
        .unwrap_or("");

    let uri = match &scheme {
        Some(s) => format!("{}{}", s, rest),
        None if package.is_some() || fallback_url.is_some() => base.to_string(),
        None => return Err(NavigationError::Unresolvable(url.to_string())),
    };

    Ok(ExternalIntent {
        original: url.to_string(),
        uri,
        package,
        action,
        fallback_url,
        flags: LaunchFlags::default(),
    })
}

/// The fallback a failed launch may load in place, if it is itself inline.
pub fn inline_fallback(intent: &ExternalIntent) -> Option<&str> {
    intent
        .fallback_url
        .as_deref()
        .filter(|u| u.starts_with("http://") || u.starts_with("https://"))
}
