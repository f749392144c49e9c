use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait Emojifier: Send + Sync {
    async fn emojify(&self, message: &str) -> anyhow::Result<String>;
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct EmojifyMessage {
    message: String,
}

#[derive(Debug, Clone)]
pub struct HttpEmojifier {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpEmojifier {
    pub fn new(http_client: reqwest::Client, endpoint: &str) -> Self {
        HttpEmojifier {
            http_client,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl Emojifier for HttpEmojifier {
    async fn emojify(&self, message: &str) -> anyhow::Result<String> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&EmojifyMessage {
                message: message.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json::<EmojifyMessage>()
            .await?;

        Ok(response.message)
    }
}
