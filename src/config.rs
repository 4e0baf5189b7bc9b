use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use lubricants_notification::{EmailConfig, SiteConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of the static site, served for every path the API does not handle
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. SMTP_USER / SMTP_PASS
    /// 2. Environment variables (LUBRICANTS__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("LUBRICANTS")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(smtp_user) = env::var("SMTP_USER") {
            builder = builder.set_override("email.smtp_username", smtp_user)?;
        }
        if let Ok(smtp_pass) = env::var("SMTP_PASS") {
            builder = builder.set_override("email.smtp_password", smtp_pass)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration shared by every command. The email section is
    /// checked by `serve` alone, see [`EmailConfig::validate`].
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.logging.level.is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                static_dir: None,
            },
            email: EmailConfig::default(),
            site: SiteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_ignores_email_section() {
        let mut config = config();
        config.email.smtp_username = "apikey".to_string();
        config.email.smtp_password = "secret".to_string();

        assert!(config.validate().is_ok());
        assert!(config.email.validate().is_err());
    }

    #[test]
    fn test_missing_credentials_is_not_a_startup_error() {
        let config = config();
        assert!(!config.email.has_credentials());
        assert!(config.validate().is_ok());
    }
}
