use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use lubricants_contact::Inquiry;
use time::{OffsetDateTime, format_description::well_known::Rfc2822};

use crate::{Mailer, OutgoingEmail, SiteConfig};

#[derive(Template)]
#[template(path = "contact/owner-notification.html")]
struct OwnerNotificationHtml<'a> {
    inquiry: &'a Inquiry,
    lines: Vec<&'a str>,
    submitted_on: &'a str,
}

#[derive(Template)]
#[template(path = "contact/owner-notification.txt")]
struct OwnerNotificationText<'a> {
    inquiry: &'a Inquiry,
    submitted_on: &'a str,
}

#[derive(Template)]
#[template(path = "contact/auto-reply.html")]
struct AutoReplyHtml<'a> {
    name: &'a str,
    site: &'a SiteConfig,
    site_email: &'a str,
}

#[derive(Template)]
#[template(path = "contact/auto-reply.txt")]
struct AutoReplyText<'a> {
    name: &'a str,
    site: &'a SiteConfig,
    site_email: &'a str,
}

/// Sends the owner notification and the submitter auto-reply for an inquiry.
#[derive(Clone)]
pub struct ContactNotifier {
    mailer: Arc<dyn Mailer>,
    owner_address: String,
    site: SiteConfig,
}

impl ContactNotifier {
    pub fn new(mailer: Arc<dyn Mailer>, owner_address: impl Into<String>, site: SiteConfig) -> Self {
        Self {
            mailer,
            owner_address: owner_address.into(),
            site,
        }
    }

    /// Sends both emails in order. Stops at the first failure; an owner
    /// notification already delivered is not recalled.
    pub async fn notify(&self, inquiry: &Inquiry) -> anyhow::Result<()> {
        let notification = self.owner_notification(inquiry, OffsetDateTime::now_utc())?;
        self.mailer
            .send(notification)
            .await
            .context("Failed to send owner notification")?;

        let reply = self.auto_reply(inquiry)?;
        self.mailer
            .send(reply)
            .await
            .context("Failed to send auto-reply")?;

        tracing::info!(
            name = %inquiry.name,
            email = %inquiry.email,
            "Contact inquiry emails sent"
        );

        Ok(())
    }

    pub fn owner_notification(
        &self,
        inquiry: &Inquiry,
        submitted_at: OffsetDateTime,
    ) -> anyhow::Result<OutgoingEmail> {
        let submitted_on = submitted_at.format(&Rfc2822)?;

        let html = OwnerNotificationHtml {
            inquiry,
            lines: inquiry.message_lines(),
            submitted_on: &submitted_on,
        }
        .render()
        .context("Failed to render owner notification HTML")?;

        let plain = OwnerNotificationText {
            inquiry,
            submitted_on: &submitted_on,
        }
        .render()
        .context("Failed to render owner notification text")?;

        Ok(OutgoingEmail {
            to: self.owner_address.to_owned(),
            subject: format!("🛢️ New Inquiry from {} - {}", inquiry.name, self.site.name),
            html,
            plain,
        })
    }

    pub fn auto_reply(&self, inquiry: &Inquiry) -> anyhow::Result<OutgoingEmail> {
        let site_email = if self.site.email.is_empty() {
            &self.owner_address
        } else {
            &self.site.email
        };

        let html = AutoReplyHtml {
            name: &inquiry.name,
            site: &self.site,
            site_email,
        }
        .render()
        .context("Failed to render auto-reply HTML")?;

        let plain = AutoReplyText {
            name: &inquiry.name,
            site: &self.site,
            site_email,
        }
        .render()
        .context("Failed to render auto-reply text")?;

        Ok(OutgoingEmail {
            to: inquiry.email.to_owned(),
            subject: format!("Thank You for Your Interest - {}", self.site.name),
            html,
            plain,
        })
    }
}
