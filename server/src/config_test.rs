use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.public_url, "http://localhost:3000");
}

#[test]
fn variables_override_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("WIDGET_PKG_DIR", "/srv/pkg"),
        ("DEMO_ACCOUNT_ID", "acct_7"),
        ("DEMO_STARTING_TOKENS", "300"),
        ("DEMO_TOKENS_PER_REPLY", "50"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.widget_pkg_dir, PathBuf::from("/srv/pkg"));
    assert_eq!(cfg.public_url, "http://localhost:8080");
    assert_eq!(cfg.demo_account_id, "acct_7");
    assert_eq!(cfg.starting_tokens, 300);
    assert_eq!(cfg.tokens_per_reply, 50);
}

#[test]
fn public_url_trailing_slash_is_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PUBLIC_URL", "https://widget.example.com/")])).unwrap();
    assert_eq!(cfg.public_url, "https://widget.example.com");
}

#[test]
fn invalid_number_is_a_typed_error() {
    let err = ServerConfig::from_lookup(lookup(&[("DEMO_STARTING_TOKENS", "lots")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "DEMO_STARTING_TOKENS", value: "lots".into() });

    let err = ServerConfig::from_lookup(lookup(&[("PORT", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "PORT", .. }));
}

#[test]
fn blank_string_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("DEMO_ACCOUNT_ID", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "DEMO_ACCOUNT_ID" });
}
