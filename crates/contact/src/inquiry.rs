use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ContactError;

/// Success marker returned by the contact endpoint and checked by the form.
pub const SUCCESS_MESSAGE: &str = "Email sent successfully";

/// Minimum message length, counted in characters.
pub const MIN_MESSAGE_LENGTH: u64 = 10;

/// Contact form body as posted by the browser.
///
/// Every field is optional so that a missing key and an empty string are
/// reported the same way.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[validate(length(min = MIN_MESSAGE_LENGTH))]
    pub message: String,
}

impl Inquiry {
    /// Message split on line breaks, for rendering with `<br>` separators.
    pub fn message_lines(&self) -> Vec<&str> {
        self.message.lines().collect()
    }
}

impl TryFrom<ContactInput> for Inquiry {
    type Error = ContactError;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(mobile), Some(message)) = (
            present(input.name),
            present(input.email),
            present(input.mobile),
            present(input.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        let inquiry = Self {
            name,
            email,
            mobile,
            message,
        };

        if let Err(errors) = inquiry.validate() {
            if errors.field_errors().contains_key("message") {
                return Err(ContactError::MessageTooShort);
            }
        }

        Ok(inquiry)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
