use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use lubricants_notification::{ContactNotifier, EmailService};

use crate::config::Config;

pub mod contact;
pub mod health;

#[derive(Clone)]
pub struct AppState {
    /// `None` when SMTP credentials are missing; contact submissions then
    /// fail with "Email service not configured".
    pub notifier: Option<ContactNotifier>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        if !config.email.has_credentials() {
            tracing::warn!("SMTP credentials not configured, contact form submissions will fail");
            return Ok(Self { notifier: None });
        }

        let service = EmailService::new(&config.email)?;
        let notifier = ContactNotifier::new(
            Arc::new(service),
            config.email.owner_address(),
            config.site.clone(),
        );

        Ok(Self {
            notifier: Some(notifier),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/contact",
            post(contact::post_contact).fallback(contact::method_not_allowed),
        )
        .with_state(state)
}
