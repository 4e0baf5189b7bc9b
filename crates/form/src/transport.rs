use async_trait::async_trait;
use lubricants_contact::ContactInput;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "/api/contact";

/// Status and raw body of the endpoint's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Delivers the serialized form to the contact endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_contact(&self, input: &ContactInput) -> Result<Reply, TransportError>;
}

/// Posts the form as JSON over HTTP.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_contact(&self, input: &ContactInput) -> Result<Reply, TransportError> {
        let response = self.client.post(&self.endpoint).json(input).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Reply { status, body })
    }
}
