use anyhow::Result;
use lubricants_form::{
    DEFAULT_ENDPOINT, FeedbackKind, Field, Fields, FormController, HttpTransport, SubmitOutcome,
};

/// Contact endpoint URL on the server at `base_url`.
pub fn contact_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), DEFAULT_ENDPOINT)
}

/// Fills the contact form with `values` and submits it to the server at
/// `base_url`, the way the site's form controller does.
pub async fn submit(base_url: &str, values: Fields<String>) -> Result<()> {
    let mut form = FormController::new(HttpTransport::new(contact_endpoint(base_url)));

    for field in Field::ALL {
        form.input(field, values[field].to_owned());
        form.blur(field);
    }

    match form.submit().await {
        SubmitOutcome::Completed(feedback) => match feedback.kind {
            FeedbackKind::Success => {
                println!("{}", feedback.text);
                Ok(())
            }
            FeedbackKind::Error => anyhow::bail!(feedback.text),
        },
        SubmitOutcome::Blocked(fields) => {
            let names: Vec<&str> = fields.iter().map(|field| field.key()).collect();
            anyhow::bail!("Please fix the following fields: {}", names.join(", "))
        }
        SubmitOutcome::Ignored => anyhow::bail!("A submission is already in progress"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_endpoint() {
        assert_eq!(
            contact_endpoint("http://127.0.0.1:3000"),
            "http://127.0.0.1:3000/api/contact"
        );
        assert_eq!(
            contact_endpoint("https://lubricants.test/"),
            "https://lubricants.test/api/contact"
        );
    }
}
