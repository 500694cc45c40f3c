use super::*;

const MINIMAL: &str = r#"{"accountId":"acct_42","authorized":true,"backendUrl":"https://api.example.com/"}"#;

#[test]
fn minimal_payload_fills_optional_defaults() {
    let cfg = WidgetConfig::from_json(MINIMAL).expect("valid");
    assert_eq!(cfg.account_id, "acct_42");
    assert!(cfg.authorized);
    assert_eq!(cfg.backend_url, "https://api.example.com");
    assert_eq!(cfg.display_name, DEFAULT_DISPLAY_NAME);
    assert_eq!(cfg.welcome_text, DEFAULT_WELCOME_TEXT);
    assert_eq!(cfg.accent_color, DEFAULT_ACCENT_COLOR);
    assert_eq!(cfg.corner, Corner::BottomRight);
}

#[test]
fn full_payload_is_parsed() {
    let raw = r##"{
        "accountId": "acct-1",
        "authorized": true,
        "displayName": "Study Buddy",
        "welcomeText": "Welcome back!",
        "backendUrl": "http://localhost:3000",
        "accentColor": "#FF8800",
        "corner": "top-left"
    }"##;
    let cfg = WidgetConfig::from_json(raw).expect("valid");
    assert_eq!(cfg.display_name, "Study Buddy");
    assert_eq!(cfg.welcome_text, "Welcome back!");
    assert_eq!(cfg.accent_color, "#ff8800");
    assert_eq!(cfg.corner, Corner::TopLeft);
    assert_eq!(cfg.billing_url(), "http://localhost:3000/billing");
}

#[test]
fn missing_required_fields_are_named() {
    let err = WidgetConfig::from_json(r#"{"authorized":true,"backendUrl":"https://x.io"}"#).expect_err("missing");
    assert_eq!(err, ConfigError::Missing("accountId"));

    let err = WidgetConfig::from_json(r#"{"accountId":"a","backendUrl":"https://x.io"}"#).expect_err("missing");
    assert_eq!(err, ConfigError::Missing("authorized"));

    let err = WidgetConfig::from_json(r#"{"accountId":"a","authorized":true}"#).expect_err("missing");
    assert_eq!(err, ConfigError::Missing("backendUrl"));
}

#[test]
fn unknown_keys_are_rejected() {
    let raw = r#"{"accountId":"a","authorized":true,"backendUrl":"https://x.io","colour":"red"}"#;
    assert!(matches!(WidgetConfig::from_json(raw), Err(ConfigError::Json(_))));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(WidgetConfig::from_json("{not json"), Err(ConfigError::Json(_))));
}

#[test]
fn unauthorized_account_declines() {
    let raw = r#"{"accountId":"a","authorized":false,"backendUrl":"https://x.io"}"#;
    assert_eq!(WidgetConfig::from_json(raw), Err(ConfigError::Unauthorized));
}

#[test]
fn account_id_must_be_path_safe() {
    let raw = r#"{"accountId":"a/b","authorized":true,"backendUrl":"https://x.io"}"#;
    assert!(matches!(
        WidgetConfig::from_json(raw),
        Err(ConfigError::Invalid { field: "accountId", .. })
    ));
}

#[test]
fn backend_url_requires_http_scheme() {
    let raw = r#"{"accountId":"a","authorized":true,"backendUrl":"ftp://x.io"}"#;
    assert!(matches!(
        WidgetConfig::from_json(raw),
        Err(ConfigError::Invalid { field: "backendUrl", .. })
    ));
}

#[test]
fn accent_color_must_be_hex() {
    let raw = r#"{"accountId":"a","authorized":true,"backendUrl":"https://x.io","accentColor":"blue"}"#;
    assert!(matches!(
        WidgetConfig::from_json(raw),
        Err(ConfigError::Invalid { field: "accentColor", .. })
    ));
}

#[test]
fn blank_optional_text_is_rejected_not_defaulted() {
    let raw = r#"{"accountId":"a","authorized":true,"backendUrl":"https://x.io","displayName":"  "}"#;
    assert!(matches!(
        WidgetConfig::from_json(raw),
        Err(ConfigError::Invalid { field: "displayName", .. })
    ));
}

#[test]
fn unknown_corner_is_rejected() {
    let raw = r#"{"accountId":"a","authorized":true,"backendUrl":"https://x.io","corner":"middle"}"#;
    assert!(matches!(WidgetConfig::from_json(raw), Err(ConfigError::Json(_))));
}

#[test]
fn missing_attribute_means_not_embedded() {
    assert_eq!(WidgetConfig::from_attribute(None), Err(ConfigError::NotEmbedded));
    assert!(WidgetConfig::from_attribute(Some(MINIMAL)).is_ok());
}
