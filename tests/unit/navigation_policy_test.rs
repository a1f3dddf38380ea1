//! Scheme policy and intent-URI resolution.

use rstest::rstest;
use webview_shell::services::navigation_policy::{
    classify, inline_fallback, is_inline, parse_intent_uri, resolve_external,
};
use webview_shell::types::errors::NavigationError;
use webview_shell::types::navigation::NavigationTarget;

#[rstest]
#[case("https://example.com")]
#[case("http://example.com/path?q=1")]
#[case("HTTPS://EXAMPLE.COM")]
#[case("about:blank")]
#[case("about://settings")]
fn inline_schemes(#[case] url: &str) {
    assert!(is_inline(url));
    assert_eq!(classify(url).unwrap(), NavigationTarget::Inline);
}

#[rstest]
#[case("mailto:someone@example.com")]
#[case("tel:+15551234567")]
#[case("weixin://dl/scan")]
#[case("market://details?id=com.example")]
#[case("file:///etc/hosts")]
fn external_schemes(#[case] url: &str) {
    assert!(!is_inline(url));
    match classify(url).unwrap() {
        NavigationTarget::External(intent) => {
            assert_eq!(intent.uri, url);
            assert_eq!(intent.original, url);
            assert!(intent.flags.new_task);
        }
        other => panic!("expected external target, got {:?}", other),
    }
}

#[test]
fn unparseable_url_is_malformed() {
    let err = classify("no scheme here").unwrap_err();
    assert!(matches!(err, NavigationError::MalformedUri(_)));
}

#[test]
fn intent_uri_rebuilds_target_scheme() {
    let intent = parse_intent_uri(
        "intent://scan/#Intent;scheme=zxing;package=com.google.zxing.client.android;end",
    )
    .unwrap();

    assert_eq!(intent.uri, "zxing://scan/");
    assert_eq!(intent.package.as_deref(), Some("com.google.zxing.client.android"));
    assert_eq!(intent.action, None);
    assert_eq!(intent.fallback_url, None);
}

#[test]
fn intent_uri_extracts_action_and_fallback() {
    let intent = parse_intent_uri(
        "intent://open?id=7#Intent;scheme=myapp;action=android.intent.action.VIEW;S.browser_fallback_url=https%3A%2F%2Fexample.com%2Fapp;end",
    )
    .unwrap();

    assert_eq!(intent.uri, "myapp://open?id=7");
    assert_eq!(intent.action.as_deref(), Some("android.intent.action.VIEW"));
    assert_eq!(intent.fallback_url.as_deref(), Some("https://example.com/app"));
    assert_eq!(inline_fallback(&intent), Some("https://example.com/app"));
}

#[test]
fn intent_without_target_is_unresolvable() {
    let err = parse_intent_uri("intent://nothing/#Intent;end").unwrap_err();
    assert!(matches!(err, NavigationError::Unresolvable(_)));
}

#[test]
fn resolved_intents_carry_new_task() {
    let intent = resolve_external("intent://x/#Intent;scheme=demo;end").unwrap();
    assert_eq!(intent.uri, "demo://x/");
    assert!(intent.flags.new_task);
}

#[test]
fn non_web_fallback_is_not_loaded_inline() {
    let intent = parse_intent_uri(
        "intent://x/#Intent;scheme=demo;S.browser_fallback_url=market%3A%2F%2Fdetails;end",
    )
    .unwrap();
    assert_eq!(inline_fallback(&intent), None);
}
