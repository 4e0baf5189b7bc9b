use thiserror::Error;

/// Reasons a contact form submission is rejected before any email is sent.
///
/// The display strings are returned verbatim to the browser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}
