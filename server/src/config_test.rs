use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_trimmed() {
    let cfg = ServerConfig::from_vars(Some(" 127.0.0.1 "), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back() {
    let cfg = ServerConfig::from_vars(Some(""), Some("  ")).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}
