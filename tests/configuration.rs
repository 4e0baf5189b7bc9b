//! Tests for configuration system

use lubricants::{Config, config::LogFormat};

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert!(config.server.static_dir.is_none());
    assert_eq!(config.email.smtp_host, "smtp.gmail.com");
    assert_eq!(config.email.smtp_port, 587);
    assert_eq!(config.site.name, "Industrial Lubricants");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_without_file_uses_defaults() {
    let config = Config::load(Some("does-not-exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.email.smtp_host, "smtp.gmail.com");
    assert_eq!(config.site.phone, "+1 (555) 123-4567");
}
