use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn parses_overrides_and_trims_slash() {
    let cfg = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("AFRICORE_API_URL", "https://api.africore.test/"),
        ("AFRICORE_PROXY_TIMEOUT_SECS", "5"),
        ("AFRICORE_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://api.africore.test");
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup(&[("PORT", " "), ("AFRICORE_API_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn invalid_port_errors() {
    let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn invalid_timeout_errors() {
    let err = Config::from_lookup(lookup(&[("AFRICORE_PROXY_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "AFRICORE_PROXY_TIMEOUT_SECS", .. }));
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("AFRICORE_CONNECT_TIMEOUT_SECS", "3");
    }
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.timeouts.connect_secs, 3);
    unsafe {
        std::env::remove_var("AFRICORE_CONNECT_TIMEOUT_SECS");
    }
}
