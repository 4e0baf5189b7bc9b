//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS (submission port 587)
    #[default]
    Starttls,
    /// Implicit TLS (port 465)
    Tls,
    /// No encryption, for local catchers such as MailDev
    None,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_security: SmtpSecurity,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address. Defaults to the SMTP username.
    #[serde(default)]
    pub from_address: String,
    /// Where inquiry notifications are delivered. Defaults to the SMTP username.
    #[serde(default)]
    pub owner_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_security: SmtpSecurity::default(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::new(),
            owner_address: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

impl EmailConfig {
    pub fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }

    pub fn from_address(&self) -> &str {
        if self.from_address.is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }

    pub fn owner_address(&self) -> &str {
        if self.owner_address.is_empty() {
            &self.smtp_username
        } else {
            &self.owner_address
        }
    }

    /// Checks the relay settings and, once credentials are set, the sender
    /// and owner mailboxes. Both default to the SMTP username, which need not
    /// be an address (e.g. `apikey`), so the errors name the setting to fill.
    pub fn validate(&self) -> Result<(), String> {
        if self.smtp_host.is_empty() {
            return Err("SMTP host must not be empty".to_string());
        }
        if self.smtp_port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }
        if !self.has_credentials() {
            return Ok(());
        }
        self.from_address()
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid sender address, set email.from_address: {e}"))?;
        self.owner_address()
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid owner address, set email.owner_address: {e}"))?;
        Ok(())
    }
}

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// Delivers rendered emails.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()>;
}

/// Email service backed by an authenticated SMTP relay
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let mailer = match config.smtp_security {
            SmtpSecurity::Starttls => SmtpTransport::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build(),
            SmtpSecurity::Tls => SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build(),
            SmtpSecurity::None => SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .credentials(creds)
                .build(),
        };

        let from: Mailbox = config.from_address().parse()?;

        tracing::info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            smtp_security = ?config.smtp_security,
            from = %from,
            "Email service initialized"
        );

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        let message = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.plain, email.html))?;

        // SmtpTransport is blocking
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_username: "owner@lubricants.test".to_string(),
            smtp_password: "secret".to_string(),
            ..EmailConfig::default()
        }
    }

    #[test]
    fn test_defaults_target_submission_relay() {
        let config = EmailConfig::default();
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.smtp_security, SmtpSecurity::Starttls);
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_credentials_require_both_values() {
        let mut config = config();
        assert!(config.has_credentials());

        config.smtp_password.clear();
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_addresses_fall_back_to_username() {
        let mut config = config();
        assert_eq!(config.from_address(), "owner@lubricants.test");
        assert_eq!(config.owner_address(), "owner@lubricants.test");

        config.from_address = "Industrial Lubricants <noreply@lubricants.test>".to_string();
        config.owner_address = "sales@lubricants.test".to_string();
        assert_eq!(
            config.from_address(),
            "Industrial Lubricants <noreply@lubricants.test>"
        );
        assert_eq!(config.owner_address(), "sales@lubricants.test");
    }

    #[test]
    fn test_validate() {
        assert!(EmailConfig::default().validate().is_ok());
        assert!(config().validate().is_ok());

        let mut bad = config();
        bad.owner_address = "sales".to_string();
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.smtp_port = 0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_login_that_is_not_an_address() {
        let mut config = config();
        config.smtp_username = "apikey".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.contains("email.from_address"), "{err}");

        config.from_address = "noreply@lubricants.test".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("email.owner_address"), "{err}");

        config.owner_address = "sales@lubricants.test".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_parses_sender() {
        let mut config = config();
        config.from_address = "Industrial Lubricants <noreply@lubricants.test>".to_string();
        let service = EmailService::new(&config).unwrap();
        assert_eq!(service.from.email.to_string(), "noreply@lubricants.test");

        config.from_address = "not an address".to_string();
        assert!(EmailService::new(&config).is_err());
    }
}
