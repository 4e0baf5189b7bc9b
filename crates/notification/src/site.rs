use serde::Deserialize;

/// Company details rendered into outgoing emails.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_tagline")]
    pub tagline: String,
    #[serde(default = "default_site_phone")]
    pub phone: String,
    /// Public contact address shown in the auto-reply footer. Falls back to
    /// the owner address when empty.
    #[serde(default)]
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_site_tagline(),
            phone: default_site_phone(),
            email: String::new(),
        }
    }
}

fn default_site_name() -> String {
    "Industrial Lubricants".to_string()
}

fn default_site_tagline() -> String {
    "Powering Industries, Protecting Machines".to_string()
}

fn default_site_phone() -> String {
    "+1 (555) 123-4567".to_string()
}
