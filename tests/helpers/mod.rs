//! Shared setup for router-level tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use lubricants::{AppState, error::MessageBody};
use lubricants_notification::{ContactNotifier, Mailer, OutgoingEmail, SiteConfig};
use tower::ServiceExt;

pub const OWNER: &str = "owner@lubricants.test";

/// Records every email instead of delivering it. Fails the send at index
/// `fail_on` when set.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub attempts: Mutex<usize>,
    pub fail_on: Option<usize>,
}

impl RecordingMailer {
    pub fn failing_on(index: usize) -> Self {
        Self {
            fail_on: Some(index),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };

        if self.fail_on == Some(attempt) {
            anyhow::bail!("554 relay rejected message");
        }

        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub fn app(mailer: Arc<RecordingMailer>) -> Router {
    lubricants::router(AppState {
        notifier: Some(ContactNotifier::new(mailer, OWNER, SiteConfig::default())),
    })
}

pub fn unconfigured_app() -> Router {
    lubricants::router(AppState { notifier: None })
}

pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane",
        "email": "jane@x.com",
        "mobile": "555-1234",
        "message": "Interested in bulk oil pricing",
    })
}

pub async fn post_json(app: Router, body: serde_json::Value) -> (StatusCode, MessageBody) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, MessageBody) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: MessageBody = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}
